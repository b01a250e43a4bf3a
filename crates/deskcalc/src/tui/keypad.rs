//! Numerical keypad for the terminal calculator
//!
//! Visual feedback: the button matching the last key lights up, and every
//! button can be clicked with the mouse.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Digit, Operator};
use crate::event::CalculatorEvent;

/// Visual group a button belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits
    Number,
    /// Arithmetic operators and equals
    Operator,
    /// Entry editing and unary functions
    Function,
    /// Full reset
    Clear,
}

impl ButtonKind {
    /// Style of an unpressed button of this kind
    #[must_use]
    pub fn style(self) -> Style {
        match self {
            Self::Number => Style::default().fg(Color::White),
            Self::Operator => Style::default().fg(Color::Yellow),
            Self::Function => Style::default().fg(Color::Cyan),
            Self::Clear => Style::default().fg(Color::Red),
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Event sent when the button is pressed
    pub event: CalculatorEvent,
    /// Visual group
    pub kind: ButtonKind,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button
    #[must_use]
    pub const fn new(event: CalculatorEvent, kind: ButtonKind) -> Self {
        Self {
            event,
            kind,
            pressed: false,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub const fn digit(digit: Digit) -> Self {
        Self::new(CalculatorEvent::Digit(digit), ButtonKind::Number)
    }

    /// Creates an operator button
    #[must_use]
    pub const fn operator(op: Operator) -> Self {
        Self::new(CalculatorEvent::Operator(op), ButtonKind::Operator)
    }

    /// Creates a function button
    #[must_use]
    pub const fn function(event: CalculatorEvent) -> Self {
        Self::new(event, ButtonKind::Function)
    }

    /// Text printed on the button
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.event.label()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout: six rows of four, the last row half filled
/// ```text
/// [ C ] [ CE] [ ⌫ ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ ± ] [ 0 ] [ . ] [ = ]
/// [ √ ] [ % ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard desk calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let mut buttons = vec![
            KeypadButton::new(CalculatorEvent::Clear, ButtonKind::Clear),
            KeypadButton::function(CalculatorEvent::ClearEntry),
            KeypadButton::function(CalculatorEvent::Backspace),
            KeypadButton::operator(Operator::Divide),
        ];

        let digit_rows = [
            ([7, 8, 9], Operator::Multiply),
            ([4, 5, 6], Operator::Subtract),
            ([1, 2, 3], Operator::Add),
        ];
        for (digits, op) in digit_rows {
            buttons.extend(
                digits
                    .into_iter()
                    .filter_map(|d| Digit::new(d).ok())
                    .map(KeypadButton::digit),
            );
            buttons.push(KeypadButton::operator(op));
        }

        buttons.push(KeypadButton::function(CalculatorEvent::Sign));
        buttons.push(KeypadButton::digit(Digit::ZERO));
        buttons.push(KeypadButton::function(CalculatorEvent::DecimalPoint));
        buttons.push(KeypadButton::new(
            CalculatorEvent::Equals,
            ButtonKind::Operator,
        ));

        buttons.push(KeypadButton::function(CalculatorEvent::SquareRoot));
        buttons.push(KeypadButton::function(CalculatorEvent::Percent));

        Self {
            buttons,
            cols: 4,
            rows: 6,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column; empty grid cells yield `None`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button that sends `event`
    #[must_use]
    pub fn find_button_by_event(&self, event: CalculatorEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button for `event`
    pub fn highlight_event(&mut self, event: CalculatorEvent) {
        self.release_all();
        if let Some(idx) = self.find_button_by_event(event) {
            self.press_button(idx);
        }
    }

    /// Currently highlighted button
    #[must_use]
    pub fn pressed_button(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(move |(i, btn)| ((i / self.cols, i % self.cols), btn))
    }

    /// Converts a click position inside the bordered `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell on each side
        if rel_x == 0
            || rel_y == 0
            || rel_x >= area.width.saturating_sub(1)
            || rel_y >= area.height.saturating_sub(1)
        {
            return None;
        }

        let btn_width = area.width.saturating_sub(2) / self.cols as u16;
        let btn_height = area.height.saturating_sub(2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        if row >= self.rows || col >= self.cols {
            return None;
        }

        let index = row * self.cols + col;
        (index < self.buttons.len()).then_some(index)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if (inner.width as usize) < cols * 3 || (inner.height as usize) < rows {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                btn.kind.style()
            };

            let label = format!("[{}]", btn.label());
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.bottom() && label_x < inner.right() {
                buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
            }
        }
    }
}
