use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
pub enum TuiEvent {
    /// A key that maps onto a core action
    Key(Action),
    /// Terminal size changed, redraw only
    Resize,
}

/// Translate a key press into a core action.
///
/// Key releases and repeats reported by enhanced keyboards are ignored so
/// every physical press counts once.
pub fn map_key(key_event: KeyEvent) -> Option<Action> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match (key_event.modifiers, key_event.code) {
        // Ctrl+C clears the search term (quits outside search)
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Clear),
        // Ctrl+Q quits from anywhere
        (KeyModifiers::CONTROL, KeyCode::Char('q')) => Some(Action::ForceQuit),
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(Action::Char(c)),
        (_, KeyCode::Backspace | KeyCode::Delete) => Some(Action::Backspace),
        (_, KeyCode::Enter) => Some(Action::Enter),
        (_, KeyCode::Esc) => Some(Action::Escape),
        (_, KeyCode::Up) => Some(Action::Up),
        (_, KeyCode::Down) => Some(Action::Down),
        (_, KeyCode::Left) => Some(Action::Left),
        (_, KeyCode::Right) => Some(Action::Right),
        (_, KeyCode::PageUp) => Some(Action::PageUp),
        (_, KeyCode::PageDown) => Some(Action::PageDown),
        (_, KeyCode::Home) => Some(Action::Home),
        (_, KeyCode::End) => Some(Action::End),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Wait up to `timeout` for the next relevant event.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event).map(TuiEvent::Key)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(Action::Up));
        assert_eq!(map_key(press(KeyCode::End)), Some(Action::End));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Action::Enter));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Escape));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Action::Char('q')));
    }

    #[test]
    fn test_shifted_chars_are_text() {
        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(map_key(event), Some(Action::Char('G')));
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(map_key(ctrl('c')), Some(Action::Clear));
        assert_eq!(map_key(ctrl('q')), Some(Action::ForceQuit));
        // Other control chords never reach the search term
        assert_eq!(map_key(ctrl('x')), None);
    }

    #[test]
    fn test_releases_are_ignored() {
        let mut event = press(KeyCode::Down);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event), None);
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(press(KeyCode::Tab)), None);
        assert_eq!(map_key(press(KeyCode::F(1))), None);
    }
}
