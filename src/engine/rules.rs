use crate::board::{Board, CellId, Color, PieceId};
use serde::{Deserialize, Serialize};

/// A reachable destination. `over` is the intermediate cell of a jump-beyond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub to: CellId,
    pub over: Option<CellId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    ReachedFarRow,
    Eliminated,
}

/// Result of applying one move to a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commit {
    pub from: CellId,
    pub captured: Option<PieceId>,
    pub end: Option<(Color, EndReason)>,
}

/// Destinations for the piece standing on `from`, moving for `side`.
///
/// Each forward diagonal yields the neighbor if it is free, otherwise the cell
/// one further step along if that one is free. The intermediate piece is not
/// checked for ownership, so a jump over a friendly piece is also produced.
pub fn destinations(board: &Board, from: CellId, side: Color) -> Vec<LegalMove> {
    let mut out = Vec::with_capacity(2);
    for dir in side.forward() {
        let Some(next) = board.neighbor(from, dir) else { continue };
        if board.is_free(next) {
            out.push(LegalMove { to: next, over: None });
            continue;
        }
        if let Some(beyond) = board.neighbor(next, dir) {
            if board.is_free(beyond) {
                out.push(LegalMove { to: beyond, over: Some(next) });
            }
        }
    }
    out
}

/// Destinations for a live piece, moving in its own color's direction.
pub fn piece_destinations(board: &Board, piece: PieceId) -> Vec<LegalMove> {
    match board.piece(piece) {
        Some(p) if p.is_alive() => destinations(board, p.home(), p.color),
        _ => Vec::new(),
    }
}

/// Every (piece, move) pair available to `side`.
pub fn side_moves(board: &Board, side: Color) -> Vec<(PieceId, LegalMove)> {
    let mut out = Vec::new();
    for (id, piece) in board.pieces_of(side) {
        for mv in destinations(board, piece.home(), side) {
            out.push((id, mv));
        }
    }
    out
}

pub fn has_moves(board: &Board, side: Color) -> bool {
    board
        .pieces_of(side)
        .any(|(_, p)| !destinations(board, p.home(), side).is_empty())
}

/// Applies `mv` for `piece`: capture, relocation, pairing rebuild, then the
/// terminal check. The far-row win is tested before elimination.
/// `None` if `piece` is unknown or captured, or if `mv` is not one of its
/// current destinations.
pub fn commit(board: &mut Board, piece: PieceId, mv: LegalMove) -> Option<Commit> {
    let p = board.piece(piece).filter(|p| p.is_alive())?;
    let (from, side) = (p.home(), p.color);
    if !destinations(board, from, side).contains(&mv) {
        return None;
    }
    let captured = mv.over.and_then(|over| board.vacate(over));
    board.place(piece, mv.to);
    board.reset_pairing();
    Some(Commit { from, captured, end: terminal(board, side, mv.to) })
}

/// Game end caused by `side` having just landed on `to`.
pub fn terminal(board: &Board, side: Color, to: CellId) -> Option<(Color, EndReason)> {
    if to.row() == side.far_row() {
        return Some((side, EndReason::ReachedFarRow));
    }
    if board.live_count(side.opponent()) == 0 {
        return Some((side, EndReason::Eliminated));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: u8, col: u8) -> CellId { CellId::new(row, col).unwrap() }

    #[test]
    fn opening_has_seven_moves_per_side() {
        let b = Board::standard();
        assert_eq!(side_moves(&b, Color::White).len(), 7);
        assert_eq!(side_moves(&b, Color::Black).len(), 7);
    }

    #[test]
    fn edge_piece_has_one_direction() {
        let b = Board::standard();
        let moves = destinations(&b, c(2, 7), Color::White);
        assert_eq!(moves, vec![LegalMove { to: c(3, 6), over: None }]);
    }

    #[test]
    fn blocked_jump_yields_nothing() {
        let b = Board::from_placements(&[
            (Color::White, c(2, 1)),
            (Color::Black, c(3, 0)),
            (Color::Black, c(3, 2)),
            (Color::Black, c(4, 3)),
        ])
        .unwrap();
        // (3,0) has no further cell to the left; (4,3) blocks the right jump.
        assert!(destinations(&b, c(2, 1), Color::White).is_empty());
        assert!(!has_moves(&b, Color::White));
    }

    #[test]
    fn commit_rejects_moves_outside_the_destinations() {
        let mut b = Board::standard();
        let piece = b.occupant(c(1, 2)).unwrap();
        // Step onto an occupied cell.
        assert_eq!(commit(&mut b, piece, LegalMove { to: c(2, 3), over: None }), None);
        // Jump with a made-up intermediate cell.
        let front = b.occupant(c(2, 3)).unwrap();
        let bogus = LegalMove { to: c(3, 4), over: Some(c(2, 3)) };
        assert_eq!(commit(&mut b, front, bogus), None);
        assert_eq!(b, Board::standard());
        assert!(b.validate().is_ok());
    }

    #[test]
    fn commit_applies_a_listed_destination() {
        let mut b = Board::standard();
        let piece = b.occupant(c(2, 3)).unwrap();
        let mv = destinations(&b, c(2, 3), Color::White)[0];
        let done = commit(&mut b, piece, mv).unwrap();
        assert_eq!(done, Commit { from: c(2, 3), captured: None, end: None });
        assert_eq!(b.occupant(mv.to), Some(piece));
        assert!(b.validate().is_ok());
    }

    #[test]
    fn far_row_takes_precedence_over_elimination() {
        let b = Board::from_placements(&[(Color::Black, c(0, 1))]).unwrap();
        assert_eq!(terminal(&b, Color::Black, c(0, 1)), Some((Color::Black, EndReason::ReachedFarRow)));
    }
}
