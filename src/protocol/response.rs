//! Response framing
//!
//! Every response is one frame: a status prefix, the payload, and a
//! terminating blank line. The blank line is what tells the controller the
//! frame is complete, so there is exactly one, always.
//!
//! ```text
//! Success: "= <payload>\n\n"   (payload may be empty)
//! Error:   "? <message>\n\n"
//! ```
//!
//! Illegal-move messages are part of the wire contract and must match
//! existing controllers byte for byte.

use std::fmt;

/// Frame a success response.
pub fn success(payload: &str) -> String {
    format!("= {}\n\n", payload)
}

/// Frame an error response.
pub fn error(message: &str) -> String {
    format!("? {}\n\n", message)
}

/// Rejection reasons for the `play` validation pipeline, in the order the
/// stages run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    WrongColor,
    WrongCoordinate,
    Occupied,
    Suicide,
    Capture,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IllegalReason::WrongColor => "wrong color",
            IllegalReason::WrongCoordinate => "wrong coordinate",
            IllegalReason::Occupied => "occupied",
            IllegalReason::Suicide => "suicide",
            IllegalReason::Capture => "capture",
        };
        f.write_str(s)
    }
}

/// The verbatim illegal-move payload for a rejected `play`.
///
/// Both tokens are echoed exactly as the controller sent them.
pub fn illegal_move(color_token: &str, move_token: &str, reason: IllegalReason) -> String {
    format!("illegal move: \"{} {}\" {}", color_token, move_token, reason)
}
