//! Terminal front-end for the quiz.
//!
//! This is a small rendering layer for terminal play. It avoids widget
//! toolkits and instead renders into a simple framebuffer that is diffed and
//! flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: snapshot + UI state in, framebuffer out
//! - Give each grid cell two columns so one emoji fits per cell

pub mod fb;
pub mod quiz_view;
pub mod render_throttle;
pub mod renderer;

pub use times_quiz_core as core;
pub use times_quiz_types as types;

pub use fb::{text_width, Cell, CellStyle, FrameBuffer, Rgb, WIDE_CONTINUATION};
pub use quiz_view::{AnchorY, MediaStatusView, QuizView, UiState, Viewport, CONTENT_HEIGHT};
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{
    encode_diff_into, encode_full_into, encode_restore_into, install_panic_restore, TerminalRenderer,
};
