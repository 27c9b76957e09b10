//! Protocol module - JSON message types for the headless adapter
//!
//! Every message is one JSON object on one line, tagged by `type`.

use serde::{Deserialize, Serialize};

use crate::core::{GridCell, QuizSnapshot};
use crate::types::{Outcome, Phase, QuizMode, GRID_SIZE, OPTION_COUNT};

/// Marker written for inactive grid cells.
pub const EMPTY_CELL: char = '.';

// ============== Client -> Quiz Messages ==============

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    SelectMode { mode: String },
    NewQuestion,
    Answer { value: i32 },
    Restart,
    Observe,
}

pub fn parse_message(json: &str) -> Result<InboundMessage, serde_json::Error> {
    serde_json::from_str(json)
}

// ============== Quiz -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    InvalidMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseLower {
    AwaitingAnswer,
    CorrectFeedback,
    WrongFeedback,
    GameOver,
}

impl From<Phase> for PhaseLower {
    fn from(value: Phase) -> Self {
        match value {
            Phase::AwaitingAnswer => Self::AwaitingAnswer,
            Phase::CorrectFeedback => Self::CorrectFeedback,
            Phase::WrongFeedback => Self::WrongFeedback,
            Phase::GameOver => Self::GameOver,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeLower {
    Pass,
    NeedsPractice,
}

impl From<Outcome> for OutcomeLower {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Pass => Self::Pass,
            Outcome::NeedsPractice => Self::NeedsPractice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSnapshot {
    pub num1: u8,
    pub num2: u8,
    pub correct: i32,
    pub options: [i32; OPTION_COUNT],
    pub glyph: char,
}

/// Full session state after one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub mode: String,
    pub seed: u32,
    pub episode_id: u32,
    pub round_count: u8,
    pub score: u32,
    pub total_answered: u32,
    pub phase: PhaseLower,
    pub question: Option<QuestionSnapshot>,
    pub last_answer: Option<i32>,
    pub outcome: Option<OutcomeLower>,
    /// `null` until the game is over.
    pub passed: Option<bool>,
    /// Nine rows of nine cells; active cells hold the glyph.
    pub grid: Vec<String>,
    /// Whether the command modified the session.
    pub changed: bool,
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Observation(ObservationMessage),
    Error(ErrorMessage),
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

pub fn create_error(code: ErrorCode, message: impl Into<String>) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        code,
        message: message.into(),
    }
}

pub fn build_observation(snap: &QuizSnapshot, changed: bool) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        mode: snap.mode.as_str().to_string(),
        seed: snap.seed,
        episode_id: snap.episode_id,
        round_count: snap.round_count,
        score: snap.score,
        total_answered: snap.total_answered,
        phase: snap.phase.into(),
        question: snap.question.map(|q| QuestionSnapshot {
            num1: q.num1,
            num2: q.num2,
            correct: q.correct,
            options: q.options,
            glyph: q.glyph,
        }),
        last_answer: snap.last_answer,
        outcome: snap.outcome.map(OutcomeLower::from),
        passed: snap.passed(),
        grid: grid_rows(snap),
        changed,
    }
}

fn grid_rows(snap: &QuizSnapshot) -> Vec<String> {
    let mut rows = Vec::with_capacity(GRID_SIZE as usize);
    let grid = snap.grid();
    for r in 0..GRID_SIZE {
        let mut line = String::with_capacity(GRID_SIZE as usize * 4);
        for c in 0..GRID_SIZE {
            let cell = grid.and_then(|g| g.cell(r, c)).unwrap_or_default();
            match cell {
                GridCell::Active { glyph, .. } => line.push(glyph),
                GridCell::Empty => line.push(EMPTY_CELL),
            }
        }
        rows.push(line);
    }
    rows
}

/// Parse a mode name from a `select_mode` command.
pub fn parse_mode(s: &str) -> Result<QuizMode, ErrorMessage> {
    QuizMode::from_str(s).ok_or_else(|| {
        create_error(
            ErrorCode::InvalidMode,
            format!("unknown mode {s:?}; expected \"random\" or \"2\"..\"9\""),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QuizSession;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_message(r#"{"type":"select_mode","mode":"7"}"#).unwrap(),
            InboundMessage::SelectMode {
                mode: "7".to_string()
            }
        );
        assert_eq!(
            parse_message(r#"{"type":"new_question"}"#).unwrap(),
            InboundMessage::NewQuestion
        );
        assert_eq!(
            parse_message(r#"{"type":"answer","value":42}"#).unwrap(),
            InboundMessage::Answer { value: 42 }
        );
        assert_eq!(
            parse_message(r#"{"type":"restart"}"#).unwrap(),
            InboundMessage::Restart
        );
        assert_eq!(
            parse_message(r#"{"type":"observe"}"#).unwrap(),
            InboundMessage::Observe
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_message("not json").is_err());
        assert!(parse_message(r#"{"type":"jump"}"#).is_err());
        assert!(parse_message(r#"{"type":"answer","value":"ten"}"#).is_err());
        assert!(parse_message(r#"{"type":"answer"}"#).is_err());
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("random").unwrap(), QuizMode::Random);
        assert_eq!(parse_mode("9").unwrap(), QuizMode::Table(9));
        let err = parse_mode("12").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidMode);
    }

    #[test]
    fn test_error_serializes_with_snake_case_code() {
        let err = create_error(ErrorCode::InvalidJson, "bad line");
        let json = serde_json::to_string(&Response::Error(err)).unwrap();
        assert_eq!(
            json,
            r#"{"type":"error","code":"invalid_json","message":"bad line"}"#
        );
    }

    #[test]
    fn test_observation_fields() {
        let session = QuizSession::new(5, QuizMode::Table(3));
        let obs = build_observation(&session.snapshot(), false);
        assert_eq!(obs.mode, "3");
        assert_eq!(obs.round_count, 1);
        assert_eq!(obs.phase, PhaseLower::AwaitingAnswer);
        assert_eq!(obs.passed, None);
        assert_eq!(obs.grid.len(), 9);

        let q = obs.question.unwrap();
        assert_eq!(q.num1, 3);
        let active: usize = obs
            .grid
            .iter()
            .map(|row| row.chars().filter(|&ch| ch != EMPTY_CELL).count())
            .sum();
        assert_eq!(active, 3 * q.num2 as usize);
        assert!(obs.grid[3].chars().all(|ch| ch == EMPTY_CELL));
    }

    #[test]
    fn test_observation_json_shape() {
        let session = QuizSession::new(5, QuizMode::Random);
        let obs = build_observation(&session.snapshot(), true);
        let value: serde_json::Value =
            serde_json::to_value(Response::Observation(obs)).unwrap();
        assert_eq!(value["type"], "observation");
        assert_eq!(value["mode"], "random");
        assert_eq!(value["phase"], "awaiting_answer");
        assert_eq!(value["changed"], true);
        assert!(value["passed"].is_null());
        assert_eq!(value["question"]["options"].as_array().unwrap().len(), 3);
    }
}
