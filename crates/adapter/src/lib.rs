//! Adapter module - headless control via line-delimited JSON on stdio
//!
//! This module lets scripts and test harnesses play the quiz without a
//! terminal. One JSON command per input line, one JSON response per output
//! line.
//!
//! # Message Types
//!
//! ## Client → Quiz
//!
//! - **select_mode**: Switch mode (`"random"` or `"2"`..`"9"`); starts a fresh run
//! - **new_question**: Draw the next question (ends the game after round 10)
//! - **answer**: Submit a value for the current question
//! - **restart**: Start a fresh run in the current mode
//! - **observe**: Report state without changing it
//!
//! ## Quiz → Client
//!
//! - **observation**: Full session state, the 9x9 grid, and whether the command changed anything
//! - **error**: `invalid_json` or `invalid_mode` with a message
//!
//! # Example Session
//!
//! ```text
//! Quiz -> Client: {"type":"observation","mode":"random","round_count":1,...,"changed":false}
//! Client -> Quiz: {"type":"answer","value":42}
//! Quiz -> Client: {"type":"observation",...,"phase":"correct_feedback","score":10,...,"changed":true}
//! Client -> Quiz: {"type":"new_question"}
//! ```
//!
//! # Implementation
//!
//! - Uses **tokio** for async stdio on a current-thread runtime
//! - Malformed lines produce an error response and never end the loop
//! - See [`protocol`] for message structure definitions
//! - See [`runtime`] for the command loop

pub mod protocol;
pub mod runtime;

pub use times_quiz_core as core;
pub use times_quiz_types as types;

// Re-export protocol types for convenience
pub use protocol::*;
pub use runtime::{handle_line, run_stdio, serve};
