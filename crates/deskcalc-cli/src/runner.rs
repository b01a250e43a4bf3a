//! Command runners
//!
//! Each runner builds its engine from [`CliConfig`]; nothing is shared between
//! commands.

use std::io::{self, Write};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use deskcalc::prelude::{CalculatorEngine, KeyScript};
use deskcalc::tui::{keypad_area, render, CalculatorApp, InputHandler};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info};

use crate::commands::EvalArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_key_listing, EvalReport, OutputFormat};

/// Builds a fresh engine with the configured limits
pub fn build_engine(config: &CliConfig) -> CliResult<CalculatorEngine> {
    Ok(CalculatorEngine::with_config(config.engine.clone())?)
}

/// Runs `deskcalc eval`
pub fn run_eval(config: &CliConfig, args: &EvalArgs, out: &mut impl Write) -> CliResult<()> {
    let script = KeyScript::parse(&args.script_text())?;
    let mut engine = build_engine(config)?;
    info!(keys = script.len(), "running key script");

    let report = EvalReport::run(&mut engine, &script, args.steps);
    let format = OutputFormat::from(args.format);
    let text = report.render(format, config.color.should_color())?;
    write!(out, "{text}")?;
    if format == OutputFormat::Json {
        writeln!(out)?;
    }
    Ok(())
}

/// Runs `deskcalc keys`
pub fn run_keys(config: &CliConfig, out: &mut impl Write) -> CliResult<()> {
    write!(out, "{}", render_key_listing(config.color.should_color()))?;
    Ok(())
}

/// Runs the interactive terminal calculator until the user quits
pub fn run_tui(config: &CliConfig) -> CliResult<()> {
    let app = CalculatorApp::with_engine(build_engine(config)?);
    info!("starting terminal calculator");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> CliResult<()> {
    let input = InputHandler::new();

    while !app.should_quit() {
        let area = terminal.draw(|f| render(&app, f))?.area;
        handle_event(&mut app, &input, keypad_area(area), &event::read()?);
    }

    info!(display = app.display(), "terminal calculator closed");
    Ok(())
}

/// Applies one terminal event to the app
///
/// `keypad` is where the keypad was drawn in the last frame.
pub fn handle_event(app: &mut CalculatorApp, input: &InputHandler, keypad: Rect, event: &Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            app.handle_action(input.handle_key(*key));
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            if let Some(pressed) = app.click(keypad, mouse.column, mouse.row) {
                debug!(%pressed, "keypad click");
            }
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Up(MouseButton::Left) => {
            app.release_keys();
        }
        _ => {}
    }
}
