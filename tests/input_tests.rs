//! Keyboard flow tests: key events through the input handler into a session

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use times_quiz::core::QuizSession;
use times_quiz::input::{handle_key_event, should_quit, InputHandler};
use times_quiz::types::{Phase, QuizMode};

fn press(session: &mut QuizSession, input: &mut InputHandler, code: KeyCode) -> bool {
    input.sync(session.episode_id(), session.round_count());
    let Some(cmd) = handle_key_event(KeyEvent::from(code)) else {
        return false;
    };
    match input.handle(cmd, session.phase()) {
        Some(action) => session.apply_action(action),
        None => false,
    }
}

#[test]
fn test_number_key_answers_and_enter_continues() {
    let mut session = QuizSession::new(10, QuizMode::Random);
    let mut input = InputHandler::new();
    let idx = session.current_question().unwrap().correct_index();
    let key = char::from(b'1' + idx as u8);

    assert!(press(&mut session, &mut input, KeyCode::Char(key)));
    assert_eq!(session.phase(), Phase::CorrectFeedback);
    assert!(press(&mut session, &mut input, KeyCode::Enter));
    assert_eq!(session.round_count(), 2);
    assert_eq!(session.phase(), Phase::AwaitingAnswer);
}

#[test]
fn test_cursor_then_space_submits_highlighted_option() {
    let mut session = QuizSession::new(10, QuizMode::Table(4));
    let mut input = InputHandler::new();
    let expected = session.current_question().unwrap().options[2];

    assert!(!press(&mut session, &mut input, KeyCode::Left));
    assert_eq!(input.cursor(), 2);
    assert!(press(&mut session, &mut input, KeyCode::Char(' ')));
    assert_eq!(session.last_answer(), Some(expected));
}

#[test]
fn test_cursor_resets_on_new_question() {
    let mut session = QuizSession::new(10, QuizMode::Random);
    let mut input = InputHandler::new();
    press(&mut session, &mut input, KeyCode::Right);
    assert_eq!(input.cursor(), 1);

    press(&mut session, &mut input, KeyCode::Enter);
    press(&mut session, &mut input, KeyCode::Char('n'));
    input.sync(session.episode_id(), session.round_count());
    assert_eq!(session.round_count(), 2);
    assert_eq!(input.cursor(), 0);
}

#[test]
fn test_number_keys_ignored_on_feedback() {
    let mut session = QuizSession::new(10, QuizMode::Random);
    let mut input = InputHandler::new();
    press(&mut session, &mut input, KeyCode::Char('1'));
    let answered = session.total_answered();
    assert!(!press(&mut session, &mut input, KeyCode::Char('2')));
    assert_eq!(session.total_answered(), answered);
}

#[test]
fn test_mode_and_restart_keys() {
    let mut session = QuizSession::new(10, QuizMode::Random);
    let mut input = InputHandler::new();
    assert!(press(&mut session, &mut input, KeyCode::Char('m')));
    assert_eq!(session.mode(), QuizMode::Table(2));
    assert!(press(&mut session, &mut input, KeyCode::Char('M')));
    assert_eq!(session.mode(), QuizMode::Random);
    assert!(press(&mut session, &mut input, KeyCode::Char('r')));
    assert_eq!(session.episode_id(), 3);
}

#[test]
fn test_enter_after_game_over_restarts() {
    let mut session = QuizSession::new(10, QuizMode::Random);
    let mut input = InputHandler::new();
    while session.generate_question() {}
    assert!(press(&mut session, &mut input, KeyCode::Enter));
    assert_eq!(session.phase(), Phase::AwaitingAnswer);
    assert_eq!(session.round_count(), 1);
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
}
