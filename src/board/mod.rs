//! Board Module
//!
//! Core board vocabulary (points, colors, the pass sentinel) and the
//! [`GoBoard`] trait through which the protocol session drives a board.
//!
//! The session never holds board state itself: every command queries or
//! mutates the board through this trait, one command at a time. The board's
//! internal representation is a padded 1-D array — each row carries one
//! off-board sentinel cell, so the row stride is `size + 1`.

mod simple;

pub use simple::SimpleBoard;

use crate::error::Result;

/// Opaque index into the board's padded 1-D array representation.
///
/// Never a `(row, col)` pair; the coordinate codec in
/// [`crate::protocol::codec`] translates between the two spaces.
pub type Point = usize;

/// Sentinel for the pass move. Never a valid array index.
pub const PASS: Point = usize::MAX;

/// Largest supported board size, fixed independently of the size currently
/// configured. One column letter per size, "I" excluded.
pub const MAX_SIZE: usize = 25;

/// Smallest supported board size.
pub const MIN_SIZE: usize = 2;

/// Point contents.
///
/// `Border` marks the off-board sentinel cells that pad the 1-D array; it is
/// never a legal move target and never appears in empty-point enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Empty = 0,
    Black = 1,
    White = 2,
    Border = 3,
}

impl Color {
    /// The opposing stone color. Only meaningful for `Black` and `White`.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            other => other,
        }
    }

    /// Parse a GTP color token ("b", "w", "e"; lowercased by the caller).
    pub fn from_token(token: &str) -> Option<Color> {
        match token {
            "b" => Some(Color::Black),
            "w" => Some(Color::White),
            "e" => Some(Color::Empty),
            _ => None,
        }
    }
}

/// Board collaborator interface consumed by the protocol session.
///
/// `Clone` stands in for the board copy the capture predicate needs: the
/// hypothetical move is applied to a clone, never to the live board.
pub trait GoBoard: Clone {
    /// Re-initialize to an empty board of the given size.
    ///
    /// Fails when the size is not representable; the session propagates the
    /// failure to the controller as a framed error.
    fn reset(&mut self, size: usize) -> Result<()>;

    /// Currently configured board size.
    fn size(&self) -> usize;

    /// Side to move.
    fn current_player(&self) -> Color;

    /// Contents of a point.
    fn get_color(&self, point: Point) -> Color;

    /// All currently empty points, in ascending index order.
    ///
    /// The order must be stable across calls on an unchanged board: the
    /// capture predicate compares two of these enumerations element-wise.
    fn get_empty_points(&self) -> Vec<Point>;

    /// Whether playing `color` at `point` is legal under the board's own
    /// rules (occupancy and suicide; the no-capture rule is layered on top
    /// by the session).
    fn is_legal(&self, point: Point, color: Color) -> bool;

    /// Whether playing `color` at `point` would be suicide.
    fn check_suicide(&self, point: Point, color: Color) -> bool;

    /// Play a stone, removing any opposing groups left without liberties.
    /// Flips the side to move to the opponent of `color`. Returns false if
    /// the move could not be applied (occupied or suicide).
    fn play_move(&mut self, point: Point, color: Color) -> bool;

    /// 2-D textual rendering, highest row first, for `showboard`.
    fn render_2d(&self) -> String;
}
