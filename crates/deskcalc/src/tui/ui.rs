//! TUI rendering
//!
//! Visual feedback: the display, the pending operation and the lit keypad
//! button are all visible at once.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Where the keypad lands when the whole UI is drawn into `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    columns(area)[1]
}

/// Main column, keypad, help sidebar
fn columns(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),
            Constraint::Length(KEYPAD_WIDTH),
            Constraint::Length(24),
        ])
        .areas(area)
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let style = if engine.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(engine.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_pending(&self, area: Rect, buf: &mut Buffer) {
        let text = self
            .app
            .engine()
            .pending()
            .map(|p| format!("{} {}", p.operand(), p.operator()))
            .unwrap_or_default();

        Paragraph::new(Span::styled(text, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Pending ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_state(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let flag = |name: &'static str, on: bool| {
            let (mark, color) = if on {
                ("●", Color::Green)
            } else {
                ("○", Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(name, Style::default().fg(Color::Gray)),
            ]))
        };

        List::new([
            flag("fresh entry", engine.is_fresh_entry()),
            flag("decimal point", engine.has_decimal_point()),
        ])
        .block(
            Block::default()
                .title(" State ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .render(area, buf);
    }

    fn render_help_sidebar(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [main, keypad, help] = columns(area);

        let [display, pending, state] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
            ])
            .areas(main);

        self.render_display(display, buf);
        self.render_pending(pending, buf);
        self.render_state(state, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad, buf);
        Self::render_help_sidebar(help, buf);
    }
}

/// Width of the keypad column
pub const KEYPAD_WIDTH: u16 = 22;

/// Title on the outer border
pub const APP_TITLE: &str = " Desk Calculator ";

/// Key bindings listed in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digits"),
    ("+-*/", "Operators"),
    ("Enter =", "Equals"),
    (". ,", "Decimal"),
    ("Bksp", "Backspace"),
    ("Esc", "Clear"),
    ("Del", "Clear entry"),
    ("Mouse", "Press key"),
    ("q", "Quit"),
];
