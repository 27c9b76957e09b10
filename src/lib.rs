//! Times-table quiz (workspace facade crate).
//!
//! The quiz logic and front-ends live in dedicated crates under `crates/`;
//! this package re-exports them as `times_quiz::{adapter,core,input,term,types}`
//! and adds the application shell (configuration, logging, media lookup).

pub use times_quiz_adapter as adapter;
pub use times_quiz_core as core;
pub use times_quiz_input as input;
pub use times_quiz_term as term;
pub use times_quiz_types as types;

pub mod config;
pub mod logging;
pub mod media;
