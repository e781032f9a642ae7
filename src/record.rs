//! Serializable game records: the initial layout, the moves in order and how
//! the game ended. Stored as JSON lines, one game per line.

use crate::board::{Board, Color};
use crate::engine::rules::EndReason;
use crate::engine::{MoveEngine, MoveRecord, Phase, Presenter};
use crate::error::{PlayError, ReplayError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameResult {
    Won { winner: Color, reason: EndReason },
    /// The side to move had no legal move left.
    Blocked { side: Color },
    /// Stopped by a ply limit.
    Unfinished,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first_side: Color,
    pub layout: String,
    pub moves: Vec<MoveRecord>,
    pub result: GameResult,
}

impl<P: Presenter> MoveEngine<P> {
    pub fn record(&self) -> GameRecord {
        let result = match self.phase() {
            Phase::GameOver { winner, reason } | Phase::Animating { end: Some((winner, reason)), .. } => {
                GameResult::Won { winner: *winner, reason: *reason }
            }
            _ if !self.has_moves() => GameResult::Blocked { side: self.current_side() },
            _ => GameResult::Unfinished,
        };
        GameRecord {
            first_side: self.first_side(),
            layout: self.initial_board().layout(),
            moves: self.history().to_vec(),
            result,
        }
    }
}

/// Plays `record` back through a fresh engine, checking each capture.
pub fn replay(record: &GameRecord) -> Result<MoveEngine, ReplayError> {
    let board = Board::from_layout(&record.layout)?;
    let mut engine = MoveEngine::new(board, record.first_side);
    for mv in &record.moves {
        let piece = engine
            .board()
            .occupant(mv.from)
            .ok_or(ReplayError::MissingPiece { ply: mv.ply, from: mv.from })?;
        engine.play(piece, mv.to).map_err(|source: PlayError| ReplayError::Move { ply: mv.ply, source })?;
        let actual = engine.history().last().and_then(|m| m.captured);
        if actual != mv.captured {
            return Err(ReplayError::CaptureMismatch { ply: mv.ply, recorded: mv.captured, actual });
        }
    }
    Ok(engine)
}

pub fn write_records<P: AsRef<Path>>(records: &[GameRecord], path: P) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for r in records {
        serde_json::to_writer(&mut w, r)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_records<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
