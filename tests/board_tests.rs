//! SimpleBoard tests
//!
//! These tests verify:
//! - Board construction, reset, and size limits
//! - Move application, turn flipping, capture removal
//! - Suicide and legality checks
//! - Empty-point enumeration order (the capture predicate depends on it)

use nogo_gtp::board::{Color, GoBoard, Point, SimpleBoard};
use nogo_gtp::protocol::codec::{coord_to_point, move_to_coord, Coord};

/// Resolve a transport coordinate on the given board.
fn pt(board: &SimpleBoard, coord: &str) -> Point {
    match move_to_coord(coord, board.size()) {
        Some(Coord::Pos { row, col }) => coord_to_point(row, col, board.size()),
        other => panic!("bad test coordinate {}: {:?}", coord, other),
    }
}

/// Place a stone, asserting the move applies.
fn place(board: &mut SimpleBoard, coord: &str, color: Color) {
    let point = pt(board, coord);
    assert!(board.play_move(point, color), "could not place {}", coord);
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_board_is_empty_black_to_move() {
    let board = SimpleBoard::new(5).unwrap();
    assert_eq!(board.size(), 5);
    assert_eq!(board.current_player(), Color::Black);
    assert_eq!(board.get_empty_points().len(), 25);
}

#[test]
fn test_size_limits() {
    assert!(SimpleBoard::new(1).is_err());
    assert!(SimpleBoard::new(26).is_err());
    assert!(SimpleBoard::new(2).is_ok());
    assert!(SimpleBoard::new(25).is_ok());
}

#[test]
fn test_reset_rejects_bad_size_and_keeps_board() {
    let mut board = SimpleBoard::new(5).unwrap();
    place(&mut board, "c3", Color::Black);
    assert!(board.reset(0).is_err());

    assert!(board.reset(3).is_ok());
    assert_eq!(board.size(), 3);
    assert_eq!(board.current_player(), Color::Black);
    assert_eq!(board.get_empty_points().len(), 9);
}

#[test]
fn test_empty_points_are_ascending() {
    let mut board = SimpleBoard::new(4).unwrap();
    place(&mut board, "b2", Color::Black);
    let empties = board.get_empty_points();
    assert_eq!(empties.len(), 15);
    assert!(empties.windows(2).all(|w| w[0] < w[1]));
}

// =============================================================================
// Move Application Tests
// =============================================================================

#[test]
fn test_play_move_flips_side_to_move() {
    let mut board = SimpleBoard::new(5).unwrap();
    place(&mut board, "c3", Color::Black);
    assert_eq!(board.current_player(), Color::White);
    place(&mut board, "d3", Color::White);
    assert_eq!(board.current_player(), Color::Black);
}

#[test]
fn test_play_move_rejects_occupied() {
    let mut board = SimpleBoard::new(5).unwrap();
    let point = pt(&board, "c3");
    assert!(board.play_move(point, Color::Black));
    assert!(!board.play_move(point, Color::White));
    // Failed move does not flip the turn
    assert_eq!(board.current_player(), Color::White);
}

#[test]
fn test_capture_removes_surrounded_group() {
    // White corner stone at A1, black at B1 then A2 takes its last liberty
    let mut board = SimpleBoard::new(3).unwrap();
    place(&mut board, "a1", Color::White);
    place(&mut board, "b1", Color::Black);
    let a1 = pt(&board, "a1");
    assert_eq!(board.get_color(a1), Color::White);

    place(&mut board, "a2", Color::Black);
    assert_eq!(board.get_color(a1), Color::Empty);
    assert!(board.get_empty_points().contains(&a1));
}

#[test]
fn test_multi_stone_group_capture() {
    // Two-stone white chain on the first row, surrounded by black
    let mut board = SimpleBoard::new(4).unwrap();
    place(&mut board, "a1", Color::White);
    place(&mut board, "b1", Color::White);
    place(&mut board, "a2", Color::Black);
    place(&mut board, "b2", Color::Black);
    place(&mut board, "c1", Color::Black);

    assert_eq!(board.get_color(pt(&board, "a1")), Color::Empty);
    assert_eq!(board.get_color(pt(&board, "b1")), Color::Empty);
}

// =============================================================================
// Suicide and Legality Tests
// =============================================================================

#[test]
fn test_suicide_is_rejected_and_undone() {
    // 2x2 with white on both diagonal corners: B1 is suicide for black
    let mut board = SimpleBoard::new(2).unwrap();
    place(&mut board, "a1", Color::White);
    place(&mut board, "b2", Color::White);

    let b1 = pt(&board, "b1");
    assert!(board.check_suicide(b1, Color::Black));
    assert!(!board.is_legal(b1, Color::Black));
    assert!(!board.play_move(b1, Color::Black));
    assert_eq!(board.get_color(b1), Color::Empty);
}

#[test]
fn test_capturing_move_is_not_suicide() {
    // Black filling white's last liberty captures, so it is not suicide
    // even though the point has no empty neighbor of its own
    let mut board = SimpleBoard::new(2).unwrap();
    place(&mut board, "a1", Color::White);
    place(&mut board, "a2", Color::Black);

    let b1 = pt(&board, "b1");
    assert!(!board.check_suicide(b1, Color::Black));
    assert!(board.is_legal(b1, Color::Black));
}

#[test]
fn test_check_suicide_false_on_occupied_point() {
    let mut board = SimpleBoard::new(3).unwrap();
    place(&mut board, "b2", Color::Black);
    assert!(!board.check_suicide(pt(&board, "b2"), Color::White));
}

#[test]
fn test_is_legal_rejects_off_board_and_pass() {
    let board = SimpleBoard::new(3).unwrap();
    assert!(!board.is_legal(nogo_gtp::PASS, Color::Black));
    assert!(!board.is_legal(0, Color::Black));
}

#[test]
fn test_legality_probe_leaves_board_unchanged() {
    let mut board = SimpleBoard::new(3).unwrap();
    place(&mut board, "a1", Color::White);
    place(&mut board, "b1", Color::Black);

    let before = board.get_empty_points();
    // A2 would capture A1; probing must not touch the live board
    assert!(board.is_legal(pt(&board, "a2"), Color::Black));
    assert_eq!(board.get_empty_points(), before);
    assert_eq!(board.get_color(pt(&board, "a1")), Color::White);
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_render_2d_highest_row_first() {
    let mut board = SimpleBoard::new(2).unwrap();
    place(&mut board, "a1", Color::White);
    place(&mut board, "b2", Color::Black);
    assert_eq!(board.render_2d(), ". X\nO .");
}
