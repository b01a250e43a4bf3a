//! TUI application state
//!
//! The app owns one engine and the keypad it lights up. It never interprets
//! keys itself; every press goes through [`CalculatorEngine::apply`].

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::core::CalculatorEngine;
use crate::event::CalculatorEvent;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    keypad: Keypad,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator app around a configured engine
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        Self {
            engine,
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad with its highlight state
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a calculator key and highlights its button
    pub fn press(&mut self, event: CalculatorEvent) {
        self.engine.apply(event);
        self.keypad.highlight_event(event);
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(event) => self.press(event),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Presses the button under a mouse click, if any
    ///
    /// `keypad_area` is where the keypad widget was last drawn.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<CalculatorEvent> {
        let index = self.keypad.hit_test(keypad_area, x, y)?;
        let event = self.keypad.get_button(index)?.event;
        self.press(event);
        Some(event)
    }

    /// Removes the button highlight
    pub fn release_keys(&mut self) {
        self.keypad.release_all();
    }

    /// Clears the calculator and the highlight
    pub fn reset(&mut self) {
        self.engine.press_clear();
        self.keypad.release_all();
    }
}
