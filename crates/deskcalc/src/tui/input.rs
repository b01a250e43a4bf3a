//! Keyboard input handling
//!
//! Error prevention: keys are translated into typed calculator events before
//! they reach the engine; unbound keys become [`KeyAction::None`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Digit, Operator};
use crate::event::CalculatorEvent;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator key
    Press(CalculatorEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        let event = match code {
            KeyCode::Char('q') => return KeyAction::Quit,
            KeyCode::Char(c) => Self::char_event(c),
            KeyCode::Enter => Some(CalculatorEvent::Equals),
            KeyCode::Backspace => Some(CalculatorEvent::Backspace),
            KeyCode::Esc => Some(CalculatorEvent::Clear),
            KeyCode::Delete => Some(CalculatorEvent::ClearEntry),
            _ => None,
        };

        event.map_or(KeyAction::None, KeyAction::Press)
    }

    fn char_event(c: char) -> Option<CalculatorEvent> {
        if let Some(d) = Digit::from_char(c) {
            return Some(CalculatorEvent::Digit(d));
        }
        match c {
            '+' | '-' | '*' | '/' => Operator::from_char(c).map(CalculatorEvent::Operator),
            '=' => Some(CalculatorEvent::Equals),
            '.' | ',' => Some(CalculatorEvent::DecimalPoint),
            _ => None,
        }
    }
}
