use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cxmenu_core::Input;

/// Resolve a key press into an Input. Bindings are fixed.
pub fn resolve_input(key: KeyEvent) -> Option<Input> {
    // Global quit
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Input::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Input::Back),
        KeyCode::Up | KeyCode::Char('k') => Some(Input::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Input::MoveDown),
        KeyCode::Enter => Some(Input::Confirm),
        KeyCode::Char('r' | 'R') => Some(Input::Refresh),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Input::Digit(c)),
        _ => None,
    }
}
