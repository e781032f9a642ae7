// Board model and move/turn engine for the 3D checkers game
pub mod board;
pub mod engine;
pub mod error;
pub mod config;
pub mod record;
pub mod selfplay;
pub mod perft;
pub mod console;

pub use board::{Board, CellId, Color, Direction, PieceId};
pub use engine::{GameEvent, MoveEngine, MoveRecord, Phase, Presenter};
