//! Protocol Module
//!
//! Defines the wire protocol between a controller and the session.
//!
//! ## Protocol Format (GTP, line-oriented text)
//!
//! ### Request Format
//! ```text
//! [id] command_name [arg1 arg2 ...]\n
//! ```
//! Blank lines and `#` comment lines are ignored; a leading numeric id
//! (regression-test sequence number) is stripped and never echoed.
//!
//! ### Response Format
//! ```text
//! = <payload>\n\n      success (payload may be empty)
//! ? <message>\n\n      error
//! ```
//!
//! The terminating blank line marks frame completion.

pub mod codec;

mod command;
mod response;

pub use command::{CommandKind, COMMANDS};
pub use response::{error, illegal_move, success, IllegalReason};
