//! Grid model: 64 cells in a flat arena, pieces in a second arena, and the
//! cell <-> piece pairing between them.
//!
//! Cell ids are `row * 8 + col`. Row 0 is White's home edge, row 7 Black's.
//! Only dark cells (`(row + col) % 2 == 1`) carry neighbor links or pieces.

pub mod layout;

use crate::error::{BoardError, SetupError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIZE: usize = 8;
pub const CELLS: usize = SIZE * SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row a piece of this side must reach to win outright.
    pub fn far_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// The two diagonals this side may advance along (left first).
    pub fn forward(self) -> [Direction; 2] {
        match self {
            Color::White => [Direction::BottomLeft, Direction::BottomRight],
            Color::Black => [Direction::TopLeft, Direction::TopRight],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomLeft,
        Direction::BottomRight,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::TopRight => (-1, 1),
            Direction::BottomLeft => (1, -1),
            Direction::BottomRight => (1, 1),
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::TopLeft => 0,
            Direction::TopRight => 1,
            Direction::BottomLeft => 2,
            Direction::BottomRight => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "(u8, u8)", try_from = "(u8, u8)")]
pub struct CellId(u8);

impl CellId {
    pub fn new(row: u8, col: u8) -> Option<CellId> {
        if (row as usize) < SIZE && (col as usize) < SIZE {
            Some(CellId(row * SIZE as u8 + col))
        } else {
            None
        }
    }

    /// Signed variant for offset arithmetic; `None` when off the grid.
    pub fn at(row: i32, col: i32) -> Option<CellId> {
        if (0..SIZE as i32).contains(&row) && (0..SIZE as i32).contains(&col) {
            CellId::new(row as u8, col as u8)
        } else {
            None
        }
    }

    pub fn row(self) -> u8 { self.0 / SIZE as u8 }
    pub fn col(self) -> u8 { self.0 % SIZE as u8 }
    pub fn index(self) -> usize { self.0 as usize }

    pub fn is_dark(self) -> bool { (self.row() + self.col()) % 2 == 1 }

    pub fn all() -> impl Iterator<Item = CellId> {
        (0..CELLS as u8).map(CellId)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl From<CellId> for (u8, u8) {
    fn from(c: CellId) -> Self { (c.row(), c.col()) }
}

impl TryFrom<(u8, u8)> for CellId {
    type Error = SetupError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        CellId::new(row, col).ok_or(SetupError::OutOfRange { row: row as i32, col: col as i32 })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u16);

impl PieceId {
    pub fn index(self) -> usize { self.0 as usize }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub color: Color,
    occupant: Option<PieceId>,
    neighbors: [Option<CellId>; 4],
}

impl Cell {
    pub fn occupant(&self) -> Option<PieceId> { self.occupant }
    pub fn is_playable(&self) -> bool { self.color == Color::Black }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    home: CellId,
    alive: bool,
}

impl Piece {
    pub fn home(&self) -> CellId { self.home }
    pub fn is_alive(&self) -> bool { self.alive }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    pieces: Vec<Piece>,
}

impl Board {
    /// Checkerboard grid with links computed and no pieces.
    pub fn empty() -> Self {
        let mut cells: Vec<Cell> = CellId::all()
            .map(|id| Cell {
                color: if id.is_dark() { Color::Black } else { Color::White },
                occupant: None,
                neighbors: [None; 4],
            })
            .collect();
        for id in CellId::all() {
            if !id.is_dark() { continue; }
            for dir in Direction::ALL {
                let (dr, dc) = dir.delta();
                cells[id.index()].neighbors[dir.index()] =
                    CellId::at(id.row() as i32 + dr, id.col() as i32 + dc);
            }
        }
        Self { cells, pieces: Vec::new() }
    }

    /// Builds a board from a ready placement list. Piece ids are allocated in
    /// row-major cell order whatever the list order, so a board printed with
    /// `layout` re-parses to the same ids.
    pub fn from_placements(placements: &[(Color, CellId)]) -> Result<Self, SetupError> {
        let mut sorted = placements.to_vec();
        sorted.sort_by_key(|&(_, cell)| cell);
        let mut board = Self::empty();
        for (color, cell) in sorted {
            if !board.cells[cell.index()].is_playable() {
                return Err(SetupError::PieceOnLightCell(cell));
            }
            if board.cells[cell.index()].occupant.is_some() {
                return Err(SetupError::CellOccupied(cell));
            }
            let id = PieceId(board.pieces.len() as u16);
            board.pieces.push(Piece { color, home: cell, alive: true });
            board.cells[cell.index()].occupant = Some(id);
        }
        Ok(board)
    }

    pub fn cell(&self, id: CellId) -> &Cell { &self.cells[id.index()] }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> { self.pieces.get(id.index()) }

    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter().enumerate().map(|(i, p)| (PieceId(i as u16), p))
    }

    /// Live pieces of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces().filter(move |(_, p)| p.alive && p.color == color)
    }

    pub fn live_count(&self, color: Color) -> usize { self.pieces_of(color).count() }

    /// Precomputed diagonal link; `None` off the grid or from a light cell.
    pub fn neighbor(&self, cell: CellId, dir: Direction) -> Option<CellId> {
        self.cells[cell.index()].neighbors[dir.index()]
    }

    pub fn occupant(&self, cell: CellId) -> Option<PieceId> { self.cells[cell.index()].occupant }

    pub fn is_free(&self, cell: CellId) -> bool { self.occupant(cell).is_none() }

    /// Moves `piece` onto `cell`, updating both sides of the pairing together.
    pub(crate) fn place(&mut self, piece: PieceId, cell: CellId) {
        let from = self.pieces[piece.index()].home;
        if self.cells[from.index()].occupant == Some(piece) {
            self.cells[from.index()].occupant = None;
        }
        self.cells[cell.index()].occupant = Some(piece);
        self.pieces[piece.index()].home = cell;
    }

    /// Empties `cell`; the removed piece is deactivated with it so no live
    /// piece is ever left pointing at an empty cell.
    pub(crate) fn vacate(&mut self, cell: CellId) -> Option<PieceId> {
        let piece = self.cells[cell.index()].occupant.take()?;
        self.pieces[piece.index()].alive = false;
        Some(piece)
    }

    /// Rebuilds every cell's occupant from the live pieces' home cells.
    pub fn reset_pairing(&mut self) {
        for cell in &mut self.cells {
            cell.occupant = None;
        }
        for (i, piece) in self.pieces.iter().enumerate() {
            if piece.alive {
                self.cells[piece.home.index()].occupant = Some(PieceId(i as u16));
            }
        }
    }

    /// Checks the pairing invariants and returns the first violation.
    pub fn validate(&self) -> Result<(), BoardError> {
        for id in CellId::all() {
            let cell = &self.cells[id.index()];
            let Some(pid) = cell.occupant else { continue };
            if !cell.is_playable() {
                return Err(BoardError::LightCellOccupied(id));
            }
            let piece = &self.pieces[pid.index()];
            if !piece.alive {
                return Err(BoardError::DeadOccupant { cell: id, piece: pid });
            }
            if piece.home != id {
                return Err(BoardError::PairingMismatch { cell: id, piece: pid, home: piece.home });
            }
        }
        for (pid, piece) in self.pieces() {
            if piece.alive && self.occupant(piece.home) != Some(pid) {
                return Err(BoardError::Unpaired { piece: pid, home: piece.home });
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self { Self::standard() }
}
