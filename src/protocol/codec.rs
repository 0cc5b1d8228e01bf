//! Coordinate codec
//!
//! Pure conversions between the transport's point notation ("A1", "PASS"),
//! the `(row, col)` coordinate space, and the board's linear point index.
//!
//! ## Notation
//!
//! Columns are letters from a 24-letter alphabet that skips "I" (too easy
//! to confuse with "1"); rows are 1-based integers. Input is
//! case-insensitive, output is always uppercase. The pass move is the
//! literal "PASS" and maps to the [`PASS`] sentinel, which is carried
//! through conversions unchanged rather than interpreted as an index.

use crate::board::{Point, MAX_SIZE, PASS};
use crate::error::{GtpError, Result};

/// Column letters, "I" skipped.
const COLUMN_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// A decoded transport coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coord {
    /// The pass move; no board position.
    Pass,

    /// A board position, 1-based row and column.
    Pos { row: usize, col: usize },
}

/// Transform a linear board index to `(row, col)` coordinates.
///
/// The row stride is `board_size + 1`: one sentinel border cell per row.
/// [`PASS`] is returned unchanged, never divided.
pub fn point_to_coord(point: Point, board_size: usize) -> Coord {
    if point == PASS {
        return Coord::Pass;
    }
    let ns = board_size + 1;
    Coord::Pos {
        row: point / ns,
        col: point % ns,
    }
}

/// Transform `(row, col)` coordinates to a linear board index.
pub fn coord_to_point(row: usize, col: usize, board_size: usize) -> Point {
    (board_size + 1) * row + col
}

/// Render a coordinate as transport text such as "A1", or "PASS".
///
/// Fails with a range error when the coordinate falls outside the fixed
/// [`MAX_SIZE`] bound; the bound is independent of the currently configured
/// board size.
pub fn format_point(coord: Coord) -> Result<String> {
    match coord {
        Coord::Pass => Ok("PASS".to_string()),
        Coord::Pos { row, col } => {
            if row >= MAX_SIZE || col == 0 || col >= MAX_SIZE {
                return Err(GtpError::Protocol(format!(
                    "coordinate ({}, {}) out of range",
                    row, col
                )));
            }
            Ok(format!("{}{}", COLUMN_LETTERS[col - 1] as char, row))
        }
    }
}

/// Parse transport text into a coordinate in range `1..=board_size`.
///
/// Case-insensitive; "pass" parses to [`Coord::Pass`]. Returns `None` for
/// any malformed or out-of-range input. This is a recoverable parse
/// failure: callers turn it into an illegal-move response, never an
/// internal error.
pub fn move_to_coord(text: &str, board_size: usize) -> Option<Coord> {
    let s = text.to_lowercase();
    if s == "pass" {
        return Some(Coord::Pass);
    }

    let col_c = s.chars().next()?;
    if !col_c.is_ascii_lowercase() || col_c == 'i' {
        return None;
    }
    // Letters above "i" keep their offset so the gap stays skipped
    let mut col = (col_c as usize) - ('a' as usize);
    if col_c < 'i' {
        col += 1;
    }

    let row: usize = s[1..].parse().ok()?;
    if row < 1 {
        return None;
    }

    if col > board_size || row > board_size {
        return None;
    }
    Some(Coord::Pos { row, col })
}
