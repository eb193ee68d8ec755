use std::collections::HashSet;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use modbox_core::{Button, Error, InputSource};

/// Keyboard stand-in for the console buttons.
///
/// Terminals report key presses rather than held keys, so a button counts
/// as pressed when a press for it arrived since the previous poll.
/// Ctrl+C fails the poll instead of mapping to a button.
#[derive(Debug, Default)]
pub struct TerminalInput {
    pending: HashSet<Button>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain queued terminal events without blocking
    fn drain_events(&mut self) -> modbox_core::Result<()> {
        while event::poll(Duration::ZERO).map_err(input_error)? {
            if let Event::Key(key) = event::read().map_err(input_error)? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_interrupt(&key) {
                    return Err(Error::Input("Interrupted".to_string()));
                }
                if let Some(button) = button_for_key(key.code) {
                    self.pending.insert(button);
                }
            }
        }
        Ok(())
    }
}

fn input_error(e: std::io::Error) -> Error {
    Error::Input(e.to_string())
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Keyboard layout: letters for the face buttons, arrows for the d-pad
pub fn button_for_key(code: KeyCode) -> Option<Button> {
    match code {
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Enter => Some(Button::A),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc | KeyCode::Backspace => {
            Some(Button::B)
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char(' ') => Some(Button::Start),
        KeyCode::Up => Some(Button::Up),
        KeyCode::Down => Some(Button::Down),
        KeyCode::Left => Some(Button::Left),
        KeyCode::Right => Some(Button::Right),
        _ => None,
    }
}

impl InputSource for TerminalInput {
    fn is_pressed(&mut self, button: Button) -> modbox_core::Result<bool> {
        self.drain_events()?;
        Ok(self.pending.remove(&button))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_for_key() {
        assert_eq!(button_for_key(KeyCode::Char('b')), Some(Button::B));
        assert_eq!(button_for_key(KeyCode::Esc), Some(Button::B));
        assert_eq!(button_for_key(KeyCode::Enter), Some(Button::A));
        assert_eq!(button_for_key(KeyCode::Char(' ')), Some(Button::Start));
        assert_eq!(button_for_key(KeyCode::Up), Some(Button::Up));
        assert_eq!(button_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&key));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!is_interrupt(&key));
    }
}
