mod common;

use checkers3d::config::Opponent;
use checkers3d::console::Console;
use checkers3d::{Board, Color, MoveEngine};
use std::io::Cursor;

fn run(script: &str, opponent: Opponent) -> String {
    let mut console = Console::new(MoveEngine::default(), opponent, 1);
    let mut out = Vec::new();
    console.run(Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn scripted_move_passes_the_turn() {
    let out = run("select 2 3\nmove 3 4\nboard\nquit\n", Opponent::Human);
    assert!(out.contains("piece #"), "{out}");
    assert!(out.contains("(3, 2) (3, 4)"), "{out}");
    assert!(out.contains("White (2, 3) -> (3, 4)"), "{out}");
    assert!(out.contains("Black to move"), "{out}");
}

#[test]
fn wrong_side_and_bad_input_are_reported() {
    let out = run("select 5 0\nmove 4 1\nselect x\nfly\n", Opponent::Human);
    assert!(out.contains("belongs to the other side"), "{out}");
    assert!(out.contains("illegal destination (4, 1)"), "{out}");
    assert!(out.contains("expected: select <row> <col>"), "{out}");
    assert!(out.contains("unknown command: fly"), "{out}");
}

#[test]
fn random_opponent_answers() {
    let out = run("select 2 3\nmove 3 4\nboard\n", Opponent::Random);
    assert!(out.contains("Black plays"), "{out}");
    assert!(out.contains("White to move"), "{out}");
}

#[test]
fn commands_after_quit_are_not_run() {
    let out = run("quit\nboard\n", Opponent::Human);
    assert!(out.is_empty(), "{out}");
}

#[test]
fn blocked_random_side_ends_in_a_blocked_game() {
    // Black's only piece already sits on row 0 and can never move.
    let board = Board::from_placements(&[(Color::White, common::c(2, 3)), (Color::Black, common::c(0, 1))]).unwrap();
    let mut console = Console::new(MoveEngine::new(board, Color::White), Opponent::Random, 1);
    let mut out = Vec::new();
    console.run(std::io::Cursor::new("select 2 3\nmove 3 4\nboard\n"), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("game blocked: Black has no legal move"), "{out}");
    assert!(!out.contains("passes"), "{out}");
    assert!(!out.contains("Black plays"), "{out}");
    assert_eq!(console.engine().current_side(), Color::Black);
}
