//! Terminal frontend for the calculator
//!
//! Visual feedback through a ratatui screen with a clickable keypad

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonKind, Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI, HELP_SHORTCUTS};
