#![allow(dead_code)]
use checkers3d::{Board, CellId, Color, MoveEngine, PieceId};

pub fn c(row: u8, col: u8) -> CellId { CellId::new(row, col).expect("cell on grid") }

pub fn engine_from(layout: &str, first: Color) -> MoveEngine {
    MoveEngine::new(Board::from_layout(layout).expect("valid layout"), first)
}

pub fn piece_at(engine: &MoveEngine, row: u8, col: u8) -> PieceId {
    engine.board().occupant(c(row, col)).expect("piece on cell")
}

/// Opening position plus a Black piece on (3, 2).
pub const BLACK_ON_3_2: &str = "
    b-b-b-b-
    -b-b-b-b
    b-b-b-b-
    -.-.-.-.
    .-b-.-.-
    -w-w-w-w
    w-w-w-w-
    -w-w-w-w
";

pub const EMPTY_ROW: &str = "........";

/// Builds a layout from (row, col, glyph) triples on an otherwise empty grid.
pub fn sparse(pieces: &[(u8, u8, char)]) -> String {
    let mut rows = vec![vec!['.'; 8]; 8];
    for &(r, col, g) in pieces {
        rows[r as usize][col as usize] = g;
    }
    rows.iter().rev().map(|r| r.iter().collect::<String>()).collect::<Vec<_>>().join("\n")
}
