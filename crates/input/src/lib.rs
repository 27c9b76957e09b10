//! Terminal input module (quiz-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`KeyCommand`]s and turns those into
//! [`crate::types::QuizAction`]s with an option cursor that knows which
//! screen is showing.

pub mod handler;
pub mod map;

pub use times_quiz_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit, KeyCommand};
