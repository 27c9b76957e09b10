//! Session module - the quiz state machine
//!
//! One [`QuizSession`] holds a player's run: ten rounds of questions, the
//! score, and which screen (phase) comes next. It is mutated only through the
//! methods below, each of which runs to completion.
//!
//! ```text
//! AwaitingAnswer --correct--> CorrectFeedback --continue--> AwaitingAnswer | GameOver
//! AwaitingAnswer --wrong----> WrongFeedback   --continue--> AwaitingAnswer | GameOver
//! GameOver --restart / mode change--> AwaitingAnswer (round 1)
//! ```

use tracing::{debug, info};

use crate::grid::FactGrid;
use crate::question::Question;
use crate::rng::SimpleRng;
use crate::snapshot::QuizSnapshot;
use crate::types::*;

/// Complete quiz state for one player
#[derive(Debug, Clone)]
pub struct QuizSession {
    mode: QuizMode,
    seed: u32,
    rng: SimpleRng,
    /// Monotonic run id (increments on restart and mode change).
    episode_id: u32,
    round_count: u8,
    score: u32,
    total_answered: u32,
    current: Option<Question>,
    phase: Phase,
    last_answer: Option<i32>,
}

impl QuizSession {
    /// Create a session and draw its first question.
    ///
    /// An out-of-range table is clamped into 2..=9.
    pub fn new(seed: u32, mode: QuizMode) -> Self {
        let mut session = Self {
            mode: mode.normalized(),
            seed,
            rng: SimpleRng::new(seed),
            episode_id: 0,
            round_count: 0,
            score: 0,
            total_answered: 0,
            current: None,
            phase: Phase::AwaitingAnswer,
            last_answer: None,
        };
        session.generate_question();
        session
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn round_count(&self) -> u8 {
        self.round_count
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn last_answer(&self) -> Option<i32> {
        self.last_answer
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Draw the next question.
    ///
    /// Once all rounds are used this only moves to `GameOver`, leaving the
    /// last question in place, and returns false.
    pub fn generate_question(&mut self) -> bool {
        if self.round_count >= ROUNDS_PER_SESSION {
            if self.phase != Phase::GameOver {
                info!(
                    score = self.score,
                    outcome = Outcome::from_score(self.score).as_str(),
                    "session finished"
                );
            }
            self.phase = Phase::GameOver;
            return false;
        }

        self.round_count += 1;
        let question = Question::draw(self.mode, &mut self.rng);
        debug!(
            round = self.round_count,
            num1 = question.num1,
            num2 = question.num2,
            options = ?question.options,
            "new question"
        );

        self.current = Some(question);
        self.last_answer = None;
        self.phase = Phase::AwaitingAnswer;
        true
    }

    /// Evaluate an answer for the current question.
    ///
    /// Returns `None` (and changes nothing) unless a question is awaiting an
    /// answer. Any value other than the correct one counts as wrong.
    pub fn submit_answer(&mut self, selected: i32) -> Option<Verdict> {
        if self.phase != Phase::AwaitingAnswer {
            return None;
        }
        let question = self.current?;

        self.total_answered += 1;
        self.last_answer = Some(selected);

        let verdict = if question.is_correct(selected) {
            self.score += POINTS_PER_CORRECT;
            self.phase = Phase::CorrectFeedback;
            Verdict::Correct
        } else {
            self.phase = Phase::WrongFeedback;
            Verdict::Wrong
        };

        debug!(
            round = self.round_count,
            selected,
            correct = question.correct,
            verdict = ?verdict,
            score = self.score,
            "answer submitted"
        );
        Some(verdict)
    }

    /// Submit the option shown at `index`.
    pub fn choose(&mut self, index: usize) -> Option<Verdict> {
        let value = self.current.and_then(|q| q.option(index))?;
        self.submit_answer(value)
    }

    /// Leave a feedback screen ("tap to continue").
    ///
    /// Does nothing while a question is awaiting an answer or after game over.
    pub fn advance(&mut self) -> bool {
        if !self.phase.is_feedback() {
            return false;
        }
        self.generate_question();
        true
    }

    /// Switch mode; always starts a fresh run.
    pub fn select_mode(&mut self, mode: QuizMode) {
        let mode = mode.normalized();
        info!(from = self.mode.as_str(), to = mode.as_str(), "mode selected");
        self.mode = mode;
        self.reset();
    }

    /// Start a fresh run in the current mode.
    pub fn restart(&mut self) {
        info!(mode = self.mode.as_str(), "restart");
        self.reset();
    }

    fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.round_count = 0;
        self.score = 0;
        self.total_answered = 0;
        self.current = None;
        self.last_answer = None;
        self.phase = Phase::AwaitingAnswer;
        self.generate_question();
    }

    /// Final classification; `None` until the session is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.game_over().then(|| Outcome::from_score(self.score))
    }

    /// Session passed (only meaningful once the game is over).
    pub fn passed(&self) -> bool {
        self.outcome().is_some_and(|o| o.passed())
    }

    /// Cosmetic feedback set for the current phase.
    pub fn feedback(&self) -> Option<FeedbackCategory> {
        match self.phase {
            Phase::AwaitingAnswer => None,
            Phase::CorrectFeedback => Some(FeedbackCategory::Correct),
            Phase::WrongFeedback => Some(FeedbackCategory::Wrong),
            Phase::GameOver => self.outcome().map(|o| o.feedback()),
        }
    }

    /// Grid layout for the current question.
    pub fn grid(&self) -> Option<FactGrid> {
        self.current
            .map(|q| FactGrid::render(q.num1, q.num2, q.glyph))
    }

    /// Apply an action from any front-end.
    ///
    /// Returns true if the session changed.
    pub fn apply_action(&mut self, action: QuizAction) -> bool {
        match action {
            QuizAction::SelectMode(mode) => {
                if mode.normalized() == self.mode {
                    return false;
                }
                self.select_mode(mode);
                true
            }
            QuizAction::CycleMode { forward } => {
                let mode = if forward {
                    self.mode.next()
                } else {
                    self.mode.prev()
                };
                self.select_mode(mode);
                true
            }
            QuizAction::Answer(value) => self.submit_answer(value).is_some(),
            QuizAction::Choose(index) => self.choose(index as usize).is_some(),
            QuizAction::Continue => self.advance(),
            QuizAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut QuizSnapshot) {
        out.mode = self.mode;
        out.seed = self.seed;
        out.episode_id = self.episode_id;
        out.round_count = self.round_count;
        out.score = self.score;
        out.total_answered = self.total_answered;
        out.phase = self.phase;
        out.question = self.current;
        out.last_answer = self.last_answer;
        out.outcome = self.outcome();
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let mut s = QuizSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(1, QuizMode::Random)
    }
}
