//! Coordinate codec tests
//!
//! These tests verify:
//! - Round-trip between transport text and (row, col) coordinates
//! - The skipped-"I" column alphabet
//! - Rejection of every malformed or out-of-range input
//! - Pass-sentinel handling

use nogo_gtp::board::{MAX_SIZE, PASS};
use nogo_gtp::protocol::codec::{
    coord_to_point, format_point, move_to_coord, point_to_coord, Coord,
};

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_round_trip_all_points_7x7() {
    for row in 1..=7 {
        for col in 1..=7 {
            let coord = Coord::Pos { row, col };
            let text = format_point(coord).unwrap();
            assert_eq!(move_to_coord(&text, 7), Some(coord), "text {}", text);
        }
    }
}

#[test]
fn test_round_trip_is_case_insensitive() {
    for text in ["A1", "a1", "G7", "g7", "B3", "b3"] {
        let coord = move_to_coord(text, 7).unwrap();
        assert_eq!(format_point(coord).unwrap(), text.to_uppercase());
    }
}

#[test]
fn test_point_coord_round_trip() {
    let size = 9;
    for row in 1..=size {
        for col in 1..=size {
            let point = coord_to_point(row, col, size);
            assert_eq!(point_to_coord(point, size), Coord::Pos { row, col });
        }
    }
}

// =============================================================================
// Column Alphabet Tests
// =============================================================================

#[test]
fn test_column_letters_skip_i() {
    // Columns 1..=9 on a 9x9 board: A..H then J
    let letters: Vec<String> = (1..=9)
        .map(|col| format_point(Coord::Pos { row: 1, col }).unwrap())
        .collect();
    assert_eq!(
        letters,
        vec!["A1", "B1", "C1", "D1", "E1", "F1", "G1", "H1", "J1"]
    );
}

#[test]
fn test_letters_after_i_keep_offset() {
    // "j" maps to column 9, preserving the gap left by the skipped "i"
    assert_eq!(move_to_coord("j1", 9), Some(Coord::Pos { row: 1, col: 9 }));
    assert_eq!(move_to_coord("h1", 9), Some(Coord::Pos { row: 1, col: 8 }));
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[test]
fn test_rejects_column_i() {
    assert_eq!(move_to_coord("i1", 9), None);
    assert_eq!(move_to_coord("I1", 9), None);
}

#[test]
fn test_rejects_out_of_range() {
    // Column beyond board size
    assert_eq!(move_to_coord("h1", 7), None);
    assert_eq!(move_to_coord("z1", 7), None);
    // Row beyond board size
    assert_eq!(move_to_coord("a8", 7), None);
    // Non-positive row
    assert_eq!(move_to_coord("a0", 7), None);
    assert_eq!(move_to_coord("a-1", 7), None);
}

#[test]
fn test_rejects_malformed_input() {
    assert_eq!(move_to_coord("", 7), None);
    assert_eq!(move_to_coord("a", 7), None);
    assert_eq!(move_to_coord("1a", 7), None);
    assert_eq!(move_to_coord("aa", 7), None);
    assert_eq!(move_to_coord("a1b", 7), None);
    assert_eq!(move_to_coord("!3", 7), None);
}

// =============================================================================
// Pass-Sentinel Tests
// =============================================================================

#[test]
fn test_pass_parses_case_insensitively() {
    assert_eq!(move_to_coord("pass", 7), Some(Coord::Pass));
    assert_eq!(move_to_coord("PASS", 7), Some(Coord::Pass));
    assert_eq!(move_to_coord("PaSs", 7), Some(Coord::Pass));
}

#[test]
fn test_pass_sentinel_is_never_divided() {
    assert_eq!(point_to_coord(PASS, 7), Coord::Pass);
    assert_eq!(format_point(Coord::Pass).unwrap(), "PASS");
}

// =============================================================================
// Formatter Range Tests
// =============================================================================

#[test]
fn test_format_point_range_errors() {
    assert!(format_point(Coord::Pos { row: MAX_SIZE, col: 1 }).is_err());
    assert!(format_point(Coord::Pos { row: 1, col: MAX_SIZE }).is_err());
    assert!(format_point(Coord::Pos { row: 1, col: 0 }).is_err());
}

#[test]
fn test_format_point_bound_is_independent_of_board_size() {
    // MAX_SIZE - 1 formats fine even though no configured board is that big
    assert_eq!(
        format_point(Coord::Pos { row: 24, col: 24 }).unwrap(),
        "Y24"
    );
}
