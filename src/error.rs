use crate::board::{CellId, Color, PieceId};
use thiserror::Error;

/// Problems found while building a board from a layout or placement list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("coordinate ({row}, {col}) is outside the 8x8 grid")]
    OutOfRange { row: i32, col: i32 },

    #[error("piece placed on light cell {0}")]
    PieceOnLightCell(CellId),

    #[error("cell {0} already holds a piece")]
    CellOccupied(CellId),

    #[error("layout has {0} rows, expected 8")]
    RowCount(usize),

    #[error("layout row {row} has {width} cells, expected 8")]
    RowWidth { row: usize, width: usize },

    #[error("unknown layout character '{ch}' in row {row}")]
    UnknownChar { row: usize, ch: char },
}

/// A broken board invariant reported by `Board::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("light cell {0} has an occupant")]
    LightCellOccupied(CellId),

    #[error("cell {cell} points at dead piece {piece}")]
    DeadOccupant { cell: CellId, piece: PieceId },

    #[error("cell {cell} points at piece {piece} whose home is {home}")]
    PairingMismatch { cell: CellId, piece: PieceId, home: CellId },

    #[error("live piece {piece} is not registered on its home cell {home}")]
    Unpaired { piece: PieceId, home: CellId },
}

/// Why a selection was rejected. The engine state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("piece {piece} belongs to the other side, {side} is to move")]
    WrongSide { piece: PieceId, side: Color },

    #[error("no piece with id {0}")]
    NotAPiece(PieceId),

    #[error("cell {0} is empty")]
    EmptyCell(CellId),

    #[error("piece {0} has been captured")]
    Captured(PieceId),

    #[error("a move is still being animated")]
    Busy,

    #[error("the game is over")]
    GameOver,
}

/// Failure of the one-shot select/confirm/finish path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error(transparent)]
    Select(#[from] SelectError),

    #[error("{to} is not a legal destination for piece {piece}")]
    IllegalDestination { piece: PieceId, to: CellId },
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("bad initial layout: {0}")]
    Layout(#[from] SetupError),

    #[error("ply {ply}: {source}")]
    Move { ply: u32, source: PlayError },

    #[error("ply {ply}: no piece on {from}")]
    MissingPiece { ply: u32, from: CellId },

    #[error("ply {ply}: recorded capture {recorded:?} but replay captured {actual:?}")]
    CaptureMismatch { ply: u32, recorded: Option<PieceId>, actual: Option<PieceId> },
}
