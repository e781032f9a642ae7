use crate::board::{Board, Color};
use crate::engine::rules;

// Clone-and-commit perft; a game-ending move is a leaf.
pub fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for (piece, mv) in rules::side_moves(board, side) {
        let mut child = board.clone();
        let Some(commit) = rules::commit(&mut child, piece, mv) else { continue };
        if commit.end.is_some() {
            if depth == 1 { nodes += 1; }
            continue;
        }
        nodes += perft(&child, side.opponent(), depth - 1);
    }
    nodes
}

/// Per-root-move node counts, for splitting across threads or debugging.
pub fn divide(board: &Board, side: Color, depth: u32) -> Vec<(String, u64)> {
    if depth == 0 { return Vec::new(); }
    rules::side_moves(board, side)
        .into_iter()
        .filter_map(|(piece, mv)| {
            let mut child = board.clone();
            let commit = rules::commit(&mut child, piece, mv)?;
            let n = if commit.end.is_some() { u64::from(depth == 1) } else { perft(&child, side.opponent(), depth - 1) };
            Some((format!("{} -> {}", commit.from, mv.to), n))
        })
        .collect()
}
