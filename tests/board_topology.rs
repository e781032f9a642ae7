mod common;

use checkers3d::{Board, CellId, Color, Direction};
use common::c;
use pretty_assertions::assert_eq;

#[test]
fn dark_cell_links_follow_grid_arithmetic() {
    let b = Board::standard();
    for cell in CellId::all().filter(|c| c.is_dark()) {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let (r, col) = (cell.row() as i32 + dr, cell.col() as i32 + dc);
            let expected = CellId::at(r, col).filter(|t| t.is_dark());
            assert_eq!(b.neighbor(cell, dir), expected, "cell {cell} dir {dir:?}");
        }
    }
}

#[test]
fn light_cells_never_link() {
    let b = Board::standard();
    for cell in CellId::all().filter(|c| !c.is_dark()) {
        assert!(Direction::ALL.iter().all(|&d| b.neighbor(cell, d).is_none()), "light cell {cell} has a link");
        assert!(b.occupant(cell).is_none());
    }
}

#[test]
fn out_of_range_coordinates_are_absent() {
    assert!(CellId::new(8, 0).is_none());
    assert!(CellId::at(-1, 3).is_none());
    assert!(CellId::at(3, 8).is_none());
}

#[test]
fn standard_board_is_consistent() {
    let b = Board::standard();
    assert!(b.validate().is_ok());
    assert!(b.pieces_of(Color::White).all(|(_, p)| p.home().row() <= 2));
    assert!(b.pieces_of(Color::Black).all(|(_, p)| p.home().row() >= 5));
    assert_eq!(b.cell(c(2, 3)).color, Color::Black);
    assert_eq!(b.cell(c(2, 2)).color, Color::White);
}

#[test]
fn reset_pairing_is_idempotent() {
    let mut b = Board::standard();
    b.reset_pairing();
    let once = b.clone();
    b.reset_pairing();
    assert_eq!(b, once);
    assert_eq!(once, Board::standard());
}

#[test]
fn cell_ids_serialize_as_row_col_pairs() {
    let v = serde_json::to_value(c(2, 3)).unwrap();
    assert_eq!(v, serde_json::json!([2, 3]));
    let back: CellId = serde_json::from_value(v).unwrap();
    assert_eq!(back, c(2, 3));
    assert!(serde_json::from_value::<CellId>(serde_json::json!([9, 0])).is_err());
}
