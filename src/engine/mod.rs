//! Turn controller: selection, legal-destination marking, commit and the
//! animation hand-off.
//!
//! The engine is synchronous. `confirm` commits a move and parks the engine in
//! `Phase::Animating`; the caller signals `finish_animation` once the piece
//! has settled, which flips the turn or ends the game. All input between the
//! two calls is rejected.

pub mod rules;

use crate::board::{Board, CellId, Color, PieceId};
use crate::error::{PlayError, SelectError};
use log::{debug, info, warn};
use rules::{Commit, EndReason, LegalMove};
use serde::{Deserialize, Serialize};

/// Highlighting and animation hooks. Every method defaults to a no-op.
pub trait Presenter {
    fn show_legal_destinations(&mut self, _cells: &[CellId]) {}
    fn highlight_piece(&mut self, _piece: PieceId) {}
    fn clear_highlights(&mut self) {}
    /// Start moving `piece` visually; completion comes back via `finish_animation`.
    fn glide(&mut self, _piece: PieceId, _from: CellId, _to: CellId) {}
    /// Swing the camera over to the side about to move.
    fn swing_camera(&mut self, _next: Color) {}
}

impl Presenter for () {}

/// Presenter that only reports what it would show.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn show_legal_destinations(&mut self, cells: &[CellId]) {
        let list: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
        debug!("highlight destinations: [{}]", list.join(", "));
    }
    fn highlight_piece(&mut self, piece: PieceId) { debug!("highlight piece {}", piece); }
    fn clear_highlights(&mut self) { debug!("clear highlights"); }
    fn glide(&mut self, piece: PieceId, from: CellId, to: CellId) { debug!("glide {} {} -> {}", piece, from, to); }
    fn swing_camera(&mut self, next: Color) { debug!("camera to {}", next); }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    MoveCompleted { next: Color },
    GameEnded { winner: Color, reason: EndReason },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub ply: u32,
    pub side: Color,
    pub piece: PieceId,
    pub from: CellId,
    pub to: CellId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<PieceId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selected { piece: PieceId, moves: Vec<LegalMove> },
    Animating { record: MoveRecord, end: Option<(Color, EndReason)> },
    GameOver { winner: Color, reason: EndReason },
}

pub struct MoveEngine<P: Presenter = ()> {
    board: Board,
    initial: Board,
    first_side: Color,
    side: Color,
    phase: Phase,
    history: Vec<MoveRecord>,
    presenter: P,
}

impl MoveEngine<()> {
    pub fn new(board: Board, first_side: Color) -> Self {
        Self::with_presenter(board, first_side, ())
    }
}

impl Default for MoveEngine<()> {
    fn default() -> Self { Self::new(Board::standard(), Color::White) }
}

impl<P: Presenter> MoveEngine<P> {
    pub fn with_presenter(board: Board, first_side: Color, presenter: P) -> Self {
        Self {
            initial: board.clone(),
            board,
            first_side,
            side: first_side,
            phase: Phase::Idle,
            history: Vec::new(),
            presenter,
        }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn initial_board(&self) -> &Board { &self.initial }
    pub fn first_side(&self) -> Color { self.first_side }
    pub fn current_side(&self) -> Color { self.side }
    pub fn phase(&self) -> &Phase { &self.phase }
    pub fn history(&self) -> &[MoveRecord] { &self.history }
    pub fn presenter(&self) -> &P { &self.presenter }
    pub fn presenter_mut(&mut self) -> &mut P { &mut self.presenter }

    pub fn selected(&self) -> Option<PieceId> {
        match self.phase {
            Phase::Selected { piece, .. } => Some(piece),
            _ => None,
        }
    }

    /// Destinations marked for the current selection; empty when nothing is selected.
    pub fn legal_destinations(&self) -> &[LegalMove] {
        match &self.phase {
            Phase::Selected { moves, .. } => moves,
            _ => &[],
        }
    }

    pub fn is_animating(&self) -> bool { matches!(self.phase, Phase::Animating { .. }) }

    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            Phase::GameOver { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Whether the side to move has any legal move anywhere on the board.
    pub fn has_moves(&self) -> bool { rules::has_moves(&self.board, self.side) }

    /// Starts over from the initial board.
    pub fn restart(&mut self) {
        self.board = self.initial.clone();
        self.side = self.first_side;
        self.phase = Phase::Idle;
        self.history.clear();
        self.presenter.clear_highlights();
    }

    pub fn select(&mut self, piece: PieceId) -> Result<&[LegalMove], SelectError> {
        match self.phase {
            Phase::Animating { .. } => return Err(SelectError::Busy),
            Phase::GameOver { .. } => return Err(SelectError::GameOver),
            _ => {}
        }
        let p = self.board.piece(piece).ok_or(SelectError::NotAPiece(piece))?;
        if !p.is_alive() {
            return Err(SelectError::Captured(piece));
        }
        if p.color != self.side {
            warn!("{} cannot move piece {}: {} is to move", p.color, piece, self.side);
            return Err(SelectError::WrongSide { piece, side: self.side });
        }
        let home = p.home();
        let moves = rules::piece_destinations(&self.board, piece);
        debug!("selected {} on {}: {} destination(s)", piece, home, moves.len());

        let cells: Vec<CellId> = moves.iter().map(|m| m.to).collect();
        self.presenter.clear_highlights();
        self.presenter.highlight_piece(piece);
        self.presenter.show_legal_destinations(&cells);
        self.phase = Phase::Selected { piece, moves };
        Ok(self.legal_destinations())
    }

    /// Selects whatever piece stands on `cell`.
    pub fn select_at(&mut self, cell: CellId) -> Result<&[LegalMove], SelectError> {
        let piece = self.board.occupant(cell).ok_or(SelectError::EmptyCell(cell))?;
        self.select(piece)
    }

    /// Commits the selected piece's move to `to` if it is a marked, free
    /// destination. Anything else is ignored and returns `None`.
    pub fn confirm(&mut self, to: CellId) -> Option<MoveRecord> {
        let Phase::Selected { piece, moves } = &self.phase else {
            debug!("confirm {} ignored in phase {:?}", to, self.phase);
            return None;
        };
        let piece = *piece;
        let Some(mv) = moves.iter().copied().find(|m| m.to == to) else {
            debug!("confirm {} ignored: not a marked destination", to);
            return None;
        };
        if !self.board.is_free(to) {
            debug!("confirm {} ignored: cell is occupied", to);
            return None;
        }

        let Commit { from, captured, end } = rules::commit(&mut self.board, piece, mv)?;
        if let Some(victim) = captured {
            info!("{} captured {} on {}", self.side, victim, mv.over.unwrap_or(to));
        }
        debug_assert!(self.board.validate().is_ok());

        let record = MoveRecord { ply: self.history.len() as u32 + 1, side: self.side, piece, from, to, captured };
        self.history.push(record);
        self.presenter.clear_highlights();
        self.presenter.glide(piece, from, to);
        self.phase = Phase::Animating { record, end };
        Some(record)
    }

    /// Completion signal from the animator. Returns the event raised by the
    /// pending commit, or `None` if nothing was animating.
    pub fn finish_animation(&mut self) -> Option<GameEvent> {
        let Phase::Animating { end, .. } = self.phase else { return None };
        if let Some((winner, reason)) = end {
            info!("{} wins ({:?})", winner, reason);
            self.phase = Phase::GameOver { winner, reason };
            return Some(GameEvent::GameEnded { winner, reason });
        }
        self.side = self.side.opponent();
        self.phase = Phase::Idle;
        self.presenter.swing_camera(self.side);
        info!("{} to move", self.side);
        Some(GameEvent::MoveCompleted { next: self.side })
    }

    /// Select, confirm and settle in one step.
    pub fn play(&mut self, piece: PieceId, to: CellId) -> Result<GameEvent, PlayError> {
        self.select(piece)?;
        self.confirm(to).ok_or(PlayError::IllegalDestination { piece, to })?;
        self.finish_animation().ok_or(PlayError::IllegalDestination { piece, to })
    }
}
