//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! from the quiz core, the terminal view and the headless JSON adapter alike.
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROUNDS_PER_SESSION` | 10 | Questions per run before the game is over |
//! | `POINTS_PER_CORRECT` | 10 | Score awarded for a correct answer |
//! | `PASS_SCORE` | 80 | Final score needed for the "pass" outcome (inclusive) |
//! | `OPTION_COUNT` | 3 | Answer buttons shown per question |
//!
//! # Grid Constants
//!
//! The fact grid is always 9x9, whatever the question:
//!
//! - `GRID_SIZE`: 9 rows and 9 columns
//! - `REVEAL_START_MS`: 100ms lead-in before the first glyph pops in
//! - `REVEAL_STEP_MS`: 15ms between consecutive glyphs (row-major)
//!
//! # Examples
//!
//! ```
//! use times_quiz_types::{Outcome, Phase, QuizMode, PASS_SCORE};
//!
//! // Parse a mode from the CLI / protocol spelling
//! let mode = QuizMode::from_str("7").unwrap();
//! assert_eq!(mode, QuizMode::Table(7));
//! assert_eq!(mode.as_str(), "7");
//!
//! // Cycle through the mode selector
//! assert_eq!(QuizMode::Random.next(), QuizMode::Table(2));
//! assert_eq!(QuizMode::Table(9).next(), QuizMode::Random);
//!
//! // Outcome thresholds
//! assert_eq!(Outcome::from_score(PASS_SCORE), Outcome::Pass);
//! assert_eq!(Outcome::from_score(70), Outcome::NeedsPractice);
//!
//! assert_eq!(Phase::GameOver.as_str(), "game_over");
//! ```

use std::fmt;

/// Questions per session (10 rounds)
pub const ROUNDS_PER_SESSION: u8 = 10;

/// Points awarded per correct answer
pub const POINTS_PER_CORRECT: u32 = 10;

/// Minimum final score for the pass outcome (inclusive)
pub const PASS_SCORE: u32 = 80;

/// Number of answer options per question
pub const OPTION_COUNT: usize = 3;

/// Smallest table drilled by the random mode
pub const MIN_TABLE: u8 = 2;

/// Largest table (and largest multiplier)
pub const MAX_TABLE: u8 = 9;

/// Smallest multiplier drawn for `num2`
pub const MIN_MULTIPLIER: u8 = 1;

/// Largest multiplier drawn for `num2`
pub const MAX_MULTIPLIER: u8 = 9;

/// Fact grid is always GRID_SIZE x GRID_SIZE cells
pub const GRID_SIZE: u8 = 9;

/// Delay before the first glyph of the grid is revealed
pub const REVEAL_START_MS: u32 = 100;

/// Delay between two consecutive glyph reveals
pub const REVEAL_STEP_MS: u32 = 15;

/// Fixed timestep of the terminal loop (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Display glyphs; one is picked per question (cosmetic only).
pub const GLYPHS: [char; 10] = ['🍎', '🐶', '🚀', '🐼', '🍓', '⚽', '🚗', '🌟', '🍔', '🐯'];

const TABLE_NAMES: [&str; 8] = ["2", "3", "4", "5", "6", "7", "8", "9"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_constants() {
        assert_eq!(ROUNDS_PER_SESSION, 10);
        assert_eq!(POINTS_PER_CORRECT, 10);
        assert_eq!(PASS_SCORE, 80);
        assert_eq!(OPTION_COUNT, 3);
        assert_eq!(GRID_SIZE, 9);
        assert_eq!(REVEAL_STEP_MS, 15);
    }

    #[test]
    fn glyph_palette_is_distinct() {
        for (i, a) in GLYPHS.iter().enumerate() {
            for b in GLYPHS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn mode_round_trips_through_str() {
        for mode in QuizMode::ALL {
            assert_eq!(QuizMode::from_str(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn mode_accepts_korean_labels() {
        assert_eq!(QuizMode::from_str("7단"), Some(QuizMode::Table(7)));
        assert_eq!(QuizMode::from_str("2~9 랜덤"), Some(QuizMode::Random));
        assert_eq!(QuizMode::from_str("1"), None);
        assert_eq!(QuizMode::from_str("10"), None);
    }

    #[test]
    fn normalized_mode_matches_fixed_table() {
        for n in 0..=20u8 {
            let mode = QuizMode::Table(n).normalized();
            assert_eq!(mode, QuizMode::Table(mode.fixed_table().unwrap()));
            assert!(QuizMode::ALL.contains(&mode));
        }
    }

    #[test]
    fn mode_cycle_is_closed() {
        let mut mode = QuizMode::Random;
        for _ in 0..QuizMode::ALL.len() {
            mode = mode.next();
        }
        assert_eq!(mode, QuizMode::Random);
        assert_eq!(QuizMode::Random.prev(), QuizMode::Table(9));
        assert_eq!(QuizMode::Table(2).prev(), QuizMode::Random);
    }

    #[test]
    fn outcome_boundary_is_inclusive() {
        assert_eq!(Outcome::from_score(80), Outcome::Pass);
        assert_eq!(Outcome::from_score(100), Outcome::Pass);
        assert_eq!(Outcome::from_score(70), Outcome::NeedsPractice);
        assert_eq!(Outcome::from_score(0), Outcome::NeedsPractice);
    }
}

/// Which multiplicand range a session draws from
///
/// - **Random**: `num1` is drawn uniformly from 2..=9 ("2~9 랜덤")
/// - **Table(n)**: `num1` is always `n` ("n단"), for n in 2..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuizMode {
    #[default]
    Random,
    Table(u8),
}

impl QuizMode {
    /// Every selectable mode, in selector order.
    pub const ALL: [QuizMode; 9] = [
        QuizMode::Random,
        QuizMode::Table(2),
        QuizMode::Table(3),
        QuizMode::Table(4),
        QuizMode::Table(5),
        QuizMode::Table(6),
        QuizMode::Table(7),
        QuizMode::Table(8),
        QuizMode::Table(9),
    ];

    /// Build a fixed-table mode, rejecting tables outside 2..=9.
    pub fn table(n: u8) -> Option<Self> {
        (MIN_TABLE..=MAX_TABLE).contains(&n).then_some(QuizMode::Table(n))
    }

    /// Parse a mode (case-insensitive)
    ///
    /// Accepts `"random"`, `"2~9 랜덤"`, a bare table number `"2"`..`"9"`, or the
    /// Korean table label `"7단"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use times_quiz_types::QuizMode;
    ///
    /// assert_eq!(QuizMode::from_str("RANDOM"), Some(QuizMode::Random));
    /// assert_eq!(QuizMode::from_str("4"), Some(QuizMode::Table(4)));
    /// assert_eq!(QuizMode::from_str("4단"), Some(QuizMode::Table(4)));
    /// assert_eq!(QuizMode::from_str("12"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "random" | "rand" | "2~9" | "2~9 랜덤" => Some(QuizMode::Random),
            other => other
                .trim_end_matches('단')
                .parse::<u8>()
                .ok()
                .and_then(QuizMode::table),
        }
    }

    /// Lowercase protocol spelling (`"random"`, `"2"`..`"9"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizMode::Random => "random",
            QuizMode::Table(n) => TABLE_NAMES[((*n).clamp(MIN_TABLE, MAX_TABLE) - MIN_TABLE) as usize],
        }
    }

    /// Clamp an out-of-range table into 2..=9 so the mode names the table
    /// that is actually drilled.
    ///
    /// ```
    /// use times_quiz_types::QuizMode;
    ///
    /// assert_eq!(QuizMode::Table(12).normalized(), QuizMode::Table(9));
    /// assert_eq!(QuizMode::Table(0).normalized(), QuizMode::Table(2));
    /// assert_eq!(QuizMode::Random.normalized(), QuizMode::Random);
    /// ```
    pub fn normalized(self) -> Self {
        match self.fixed_table() {
            None => QuizMode::Random,
            Some(n) => QuizMode::Table(n),
        }
    }

    /// Fixed multiplicand, if any.
    pub fn fixed_table(&self) -> Option<u8> {
        match self {
            QuizMode::Random => None,
            QuizMode::Table(n) => Some((*n).clamp(MIN_TABLE, MAX_TABLE)),
        }
    }

    fn index(&self) -> usize {
        match self.fixed_table() {
            None => 0,
            Some(n) => (n - MIN_TABLE) as usize + 1,
        }
    }

    /// Next mode in selector order (wraps around)
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous mode in selector order (wraps around)
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed_table() {
            None => f.write_str("2~9 랜덤"),
            Some(n) => write!(f, "{}단", n),
        }
    }
}

/// Session phase; drives which view and controls are valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A question is on screen and waiting for an option
    AwaitingAnswer,
    /// The last answer was right; waiting for "next"
    CorrectFeedback,
    /// The last answer was wrong; waiting for "next"
    WrongFeedback,
    /// All rounds played; terminal until restart or mode change
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingAnswer => "awaiting_answer",
            Phase::CorrectFeedback => "correct_feedback",
            Phase::WrongFeedback => "wrong_feedback",
            Phase::GameOver => "game_over",
        }
    }

    /// True for the two "tap to continue" phases.
    pub fn is_feedback(&self) -> bool {
        matches!(self, Phase::CorrectFeedback | Phase::WrongFeedback)
    }
}

/// Result of evaluating one submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Final classification of a finished session
///
/// The `>= PASS_SCORE` cut decides which media folder the front-end uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Pass,
    NeedsPractice,
}

impl Outcome {
    pub fn from_score(score: u32) -> Self {
        if score >= PASS_SCORE {
            Outcome::Pass
        } else {
            Outcome::NeedsPractice
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "pass",
            Outcome::NeedsPractice => "needs_practice",
        }
    }

    /// Message shown on the game-over screen
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Pass => "강봄 나이스~ 🎉",
            Outcome::NeedsPractice => "공부 다시해라 ^^",
        }
    }

    pub fn feedback(&self) -> FeedbackCategory {
        match self {
            Outcome::Pass => FeedbackCategory::HighScore,
            Outcome::NeedsPractice => FeedbackCategory::LowScore,
        }
    }
}

/// Which cosmetic feedback set the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackCategory {
    Correct,
    Wrong,
    HighScore,
    LowScore,
}

impl FeedbackCategory {
    /// Media sub-folder holding this category's assets
    pub fn folder(&self) -> &'static str {
        match self {
            FeedbackCategory::Correct => "correct",
            FeedbackCategory::Wrong => "incorrect",
            FeedbackCategory::HighScore => "high score",
            FeedbackCategory::LowScore => "low score",
        }
    }

    /// Banner text for the feedback view
    pub fn banner(&self) -> &'static str {
        match self {
            FeedbackCategory::Correct => "정답입니다! 👏",
            FeedbackCategory::Wrong => "땡! 이거지롱~👇",
            FeedbackCategory::HighScore => Outcome::Pass.message(),
            FeedbackCategory::LowScore => Outcome::NeedsPractice.message(),
        }
    }
}

/// Actions that can be applied to a quiz session
///
/// Used by both the terminal key map and the headless adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// Switch to a mode (no-op if already active)
    SelectMode(QuizMode),
    /// Step through the mode selector
    CycleMode { forward: bool },
    /// Submit a raw answer value
    Answer(i32),
    /// Submit the option at a display index (0..3)
    Choose(u8),
    /// Leave a feedback screen and draw the next question
    Continue,
    /// Start a fresh 10-round run in the current mode
    Restart,
}
