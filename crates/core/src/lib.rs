//! Core quiz logic module - pure, deterministic, and testable
//!
//! This module contains the quiz rules, the session state machine and the fact
//! grid layout. It has **no dependencies** on terminal, protocol or file I/O
//! (only the `tracing` facade), which makes it:
//!
//! - **Deterministic**: Same seed produces the same question sequence
//! - **Testable**: Every transition is a plain method call
//! - **Portable**: Drives the terminal front-end and the headless adapter alike
//!
//! # Module Structure
//!
//! - [`grid`]: 9x9 fact grid with the active rows x cols rectangle and reveal order
//! - [`question`]: Fact drawing, distractor generation and the option fallback
//! - [`rng`]: Seedable LCG used for every random draw
//! - [`session`]: The quiz state machine (rounds, score, phases)
//! - [`snapshot`]: Copyable view of a session for rendering
//!
//! # Quiz Rules
//!
//! - **10 rounds** per run; asking for an 11th question ends the game
//! - **10 points** per correct answer; wrong answers cost nothing
//! - **Pass** at 80 points or more
//! - **Three options** per question, always distinct and positive
//!
//! # Example
//!
//! ```
//! use times_quiz_core::QuizSession;
//! use times_quiz_types::{Phase, QuizAction, QuizMode};
//!
//! // Create a session; the first question is drawn immediately
//! let mut quiz = QuizSession::new(12345, QuizMode::Table(7));
//! let question = *quiz.current_question().unwrap();
//! assert_eq!(question.num1, 7);
//!
//! // Answer it
//! quiz.apply_action(QuizAction::Answer(question.correct));
//! assert_eq!(quiz.phase(), Phase::CorrectFeedback);
//! assert_eq!(quiz.score(), 10);
//!
//! // Move on to round 2
//! quiz.apply_action(QuizAction::Continue);
//! assert_eq!(quiz.round_count(), 2);
//! ```

pub mod grid;
pub mod question;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use times_quiz_types as types;

// Re-export commonly used types for convenience
pub use grid::{FactGrid, GridCell};
pub use question::{build_options, fallback_options, Question};
pub use rng::SimpleRng;
pub use session::QuizSession;
pub use snapshot::QuizSnapshot;
