//! Event handling for keyboard input and terminal resizes

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Terminal events the demo reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize,
}

/// Poll for input events with a timeout
///
/// The timeout doubles as the frame interval of the demo loop.
pub fn poll(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if event::poll(timeout)? {
        match event::read()? {
            // Ignore key release events on Windows
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                return Ok(Some(InputEvent::Key(key)));
            }
            Event::Resize(_, _) => return Ok(Some(InputEvent::Resize)),
            _ => {}
        }
    }
    Ok(None)
}

/// Check if a key event is a quit command
pub fn is_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q' | 'Q') | KeyCode::Esc,
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Check if a key event is space (toggle)
pub fn is_space(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(' '))
}

/// Check if a key event is a specific character (case-insensitive, no Ctrl)
pub fn is_key(key: &KeyEvent, c: char) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_is_key_ignores_case_but_not_ctrl() {
        assert!(is_key(&key(KeyCode::Char('A'), KeyModifiers::SHIFT), 'a'));
        assert!(!is_key(&key(KeyCode::Char('a'), KeyModifiers::CONTROL), 'a'));
        assert!(is_space(&key(KeyCode::Char(' '), KeyModifiers::NONE)));
    }
}
