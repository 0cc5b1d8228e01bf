//! # nogo-gtp
//!
//! A GTP (Go Text Protocol) session handler for the NoGo rule variant,
//! where capturing any opposing stone is an illegal (losing) move:
//! - Line-oriented request/response loop over any `BufRead`/`Write` pair
//! - Static command table with per-command arity checking
//! - Bit-exact coordinate encoding and illegal-move responses
//! - Capture detection by board-copy and empty-point diff
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Controller                            │
//! │              (GUI / tournament harness / tests)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  one line per command, framed replies
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    GtpConnection                            │
//! │        (tokenize, arity check, dispatch, framing)           │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!     ┌─────────────┐                   ┌─────────────┐
//!     │   GoBoard   │                   │  GtpEngine  │
//!     │ (SimpleBoard)│                  │ (move gen)  │
//!     └─────────────┘                   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod board;
pub mod engine;
pub mod protocol;
pub mod connection;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GtpError, Result};
pub use config::Config;
pub use board::{Color, GoBoard, Point, SimpleBoard, PASS};
pub use engine::{FirstMoveEngine, GtpEngine};
pub use connection::GtpConnection;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of nogo-gtp
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
