//! Engine Module
//!
//! The move-generation collaborator behind `genmove`, plus the engine
//! identity and komi fields the administrative commands reflect.
//!
//! The engine proposes moves that are legal for the board's own rules only;
//! it knows nothing about the no-capture rule. The session re-validates
//! every proposal and answers "resign" when the engine's move would capture.

use crate::board::{Color, GoBoard, Point, PASS};

/// Engine collaborator interface consumed by the protocol session.
pub trait GtpEngine {
    /// Engine name, reported by the `name` command.
    fn name(&self) -> &str;

    /// Engine version, reported by the `version` command.
    fn version(&self) -> &str;

    /// Current komi value.
    fn komi(&self) -> f32;

    /// Set komi, forwarded from the `komi` command.
    fn set_komi(&mut self, komi: f32);

    /// Propose a move for `color` on `board`, or [`PASS`] when the engine
    /// has none.
    fn get_move<B: GoBoard>(&mut self, board: &B, color: Color) -> Point;
}

/// Deterministic engine: the lowest-index board-legal move.
pub struct FirstMoveEngine {
    komi: f32,
}

impl FirstMoveEngine {
    pub fn new() -> Self {
        Self { komi: 0.0 }
    }
}

impl Default for FirstMoveEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine for FirstMoveEngine {
    fn name(&self) -> &str {
        "NoGo"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn komi(&self) -> f32 {
        self.komi
    }

    fn set_komi(&mut self, komi: f32) {
        self.komi = komi;
    }

    fn get_move<B: GoBoard>(&mut self, board: &B, color: Color) -> Point {
        board
            .get_empty_points()
            .into_iter()
            .find(|&p| board.is_legal(p, color))
            .unwrap_or(PASS)
    }
}
