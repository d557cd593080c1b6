//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keycalc_core::keyboard::{map_key_name, KeyCommand};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A calculator key.
    Command(KeyCommand),
    Quit,
    None,
}

/// Name of a crossterm key in the calculator's key vocabulary.
#[must_use]
pub fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Esc => Some("Escape".to_string()),
        _ => None,
    }
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'q') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }
    key_name(key.code)
        .and_then(|name| map_key_name(&name))
        .map_or(KeyAction::None, KeyAction::Command)
}
