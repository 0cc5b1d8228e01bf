//! Error types for nogo-gtp
//!
//! Provides a unified error type for all operations.
//!
//! Protocol-level failures (bad arity, unknown command, illegal moves) are
//! NOT errors: they are reported to the controller as `?`-framed responses
//! and the session keeps running. An `Err` escaping a handler means the
//! contract between the protocol layer and its collaborators was violated,
//! and it terminates the session.

use thiserror::Error;

/// Result type alias using GtpError
pub type Result<T> = std::result::Result<T, GtpError>;

/// Unified error type for nogo-gtp operations
#[derive(Debug, Error)]
pub enum GtpError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Board Errors
    // -------------------------------------------------------------------------
    #[error("board error: {0}")]
    Board(String),

    // -------------------------------------------------------------------------
    // Engine Errors
    // -------------------------------------------------------------------------
    #[error("engine error: {0}")]
    Engine(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("protocol error: {0}")]
    Protocol(String),
}
