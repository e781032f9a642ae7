use checkers3d::perft::{divide, perft};
use checkers3d::{Board, Color};

#[test]
fn perft_startpos_small_depths() {
    let b = Board::standard();
    assert_eq!(perft(&b, Color::White, 0), 1);
    assert_eq!(perft(&b, Color::White, 1), 7);
    assert_eq!(perft(&b, Color::White, 2), 49);
    assert_eq!(perft(&b, Color::Black, 1), 7);
}

#[test]
fn divide_sums_to_perft() {
    let b = Board::standard();
    let parts = divide(&b, Color::White, 3);
    assert_eq!(parts.len(), 7);
    let total: u64 = parts.iter().map(|(_, n)| n).sum();
    assert_eq!(total, perft(&b, Color::White, 3));
}

#[test]
fn winning_move_is_a_leaf() {
    // Both White moves reach row 7; nothing is searched past them.
    let b = Board::from_layout("........\n.w......\nb.......\n........\n........\n........\n........\n........").unwrap();
    assert_eq!(perft(&b, Color::White, 1), 2);
    assert_eq!(perft(&b, Color::White, 3), 0);
}
