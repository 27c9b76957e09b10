//! Key mapping from terminal events to quiz commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Screen-independent meaning of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Pick the option at a display index directly (`1`..`3`)
    Pick(u8),
    /// Move the option cursor
    CursorLeft,
    CursorRight,
    /// Press the highlighted button (answer, "next", or "play again")
    Confirm,
    /// Skip to the next question from a feedback screen
    Next,
    CycleMode { forward: bool },
    Restart,
}

/// Map keyboard input to quiz commands.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        // Direct answers
        KeyCode::Char('1') => Some(KeyCommand::Pick(0)),
        KeyCode::Char('2') => Some(KeyCommand::Pick(1)),
        KeyCode::Char('3') => Some(KeyCommand::Pick(2)),

        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyCommand::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyCommand::CursorRight)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyCommand::Confirm),

        KeyCode::Char('n') | KeyCode::Char('N') => Some(KeyCommand::Next),

        // Mode selector
        KeyCode::Char('m') | KeyCode::Tab => Some(KeyCommand::CycleMode { forward: true }),
        KeyCode::Char('M') | KeyCode::BackTab => Some(KeyCommand::CycleMode { forward: false }),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
