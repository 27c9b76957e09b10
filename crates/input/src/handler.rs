//! Option cursor and screen-aware key handling.
//!
//! The same key means different things per screen: `Enter` answers while a
//! question is up, continues on a feedback screen and restarts after game over.

use crate::map::KeyCommand;
use crate::types::{Phase, QuizAction, OPTION_COUNT};

/// Tracks the highlighted option button.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    cursor: u8,
    /// (episode, round) the cursor belongs to; a new question recentres it.
    question_key: (u32, u8),
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Reset the cursor when the question on screen changed.
    pub fn sync(&mut self, episode_id: u32, round_count: u8) {
        let key = (episode_id, round_count);
        if key != self.question_key {
            self.question_key = key;
            self.cursor = 0;
        }
    }

    /// Translate a key command into a quiz action for the current phase.
    pub fn handle(&mut self, cmd: KeyCommand, phase: Phase) -> Option<QuizAction> {
        match cmd {
            KeyCommand::CycleMode { forward } => Some(QuizAction::CycleMode { forward }),
            KeyCommand::Restart => Some(QuizAction::Restart),
            KeyCommand::CursorLeft => {
                self.cursor = (self.cursor + OPTION_COUNT as u8 - 1) % OPTION_COUNT as u8;
                None
            }
            KeyCommand::CursorRight => {
                self.cursor = (self.cursor + 1) % OPTION_COUNT as u8;
                None
            }
            KeyCommand::Pick(index) => match phase {
                Phase::AwaitingAnswer => {
                    self.cursor = index;
                    Some(QuizAction::Choose(index))
                }
                _ => None,
            },
            KeyCommand::Confirm => match phase {
                Phase::AwaitingAnswer => Some(QuizAction::Choose(self.cursor)),
                Phase::CorrectFeedback | Phase::WrongFeedback => Some(QuizAction::Continue),
                Phase::GameOver => Some(QuizAction::Restart),
            },
            KeyCommand::Next => phase.is_feedback().then_some(QuizAction::Continue),
        }
    }
}
