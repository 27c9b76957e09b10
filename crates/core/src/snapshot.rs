use crate::grid::FactGrid;
use crate::question::Question;
use crate::types::{FeedbackCategory, Outcome, Phase, QuizMode};

/// Immutable copy of everything the presentation layer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuizSnapshot {
    pub mode: QuizMode,
    pub seed: u32,
    pub episode_id: u32,
    pub round_count: u8,
    pub score: u32,
    pub total_answered: u32,
    pub phase: Phase,
    pub question: Option<Question>,
    pub last_answer: Option<i32>,
    /// Set only when `phase == GameOver`.
    pub outcome: Option<Outcome>,
}

impl QuizSnapshot {
    pub fn clear(&mut self) {
        self.mode = QuizMode::Random;
        self.seed = 0;
        self.episode_id = 0;
        self.round_count = 0;
        self.score = 0;
        self.total_answered = 0;
        self.phase = Phase::AwaitingAnswer;
        self.question = None;
        self.last_answer = None;
        self.outcome = None;
    }

    /// True when an answer can be submitted.
    pub fn playable(&self) -> bool {
        self.phase == Phase::AwaitingAnswer && self.question.is_some()
    }

    pub fn passed(&self) -> Option<bool> {
        self.outcome.map(|o| o.passed())
    }

    pub fn feedback(&self) -> Option<FeedbackCategory> {
        match self.phase {
            Phase::AwaitingAnswer => None,
            Phase::CorrectFeedback => Some(FeedbackCategory::Correct),
            Phase::WrongFeedback => Some(FeedbackCategory::Wrong),
            Phase::GameOver => self.outcome.map(|o| o.feedback()),
        }
    }

    pub fn grid(&self) -> Option<FactGrid> {
        self.question
            .map(|q| FactGrid::render(q.num1, q.num2, q.glyph))
    }
}

impl Default for QuizSnapshot {
    fn default() -> Self {
        Self {
            mode: QuizMode::Random,
            seed: 0,
            episode_id: 0,
            round_count: 0,
            score: 0,
            total_answered: 0,
            phase: Phase::AwaitingAnswer,
            question: None,
            last_answer: None,
            outcome: None,
        }
    }
}
