//! Output formatting for eval results and the key listing

use console::style;
use deskcalc::prelude::{CalculatorEngine, CalculatorEvent, KeyScript, ERROR_TOKEN};
use deskcalc::tui::{Keypad, HELP_SHORTCUTS};
use serde::{Deserialize, Serialize};

/// Output format for eval results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Display after one key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalStep {
    /// Script token of the key
    pub event: String,
    /// Display text after the key
    pub display: String,
}

/// Result of running a key script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalReport {
    /// Final display text
    pub display: String,
    /// Per-key displays, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<EvalStep>>,
}

impl EvalReport {
    /// Runs `script` on `engine`, recording every step if asked
    pub fn run(engine: &mut CalculatorEngine, script: &KeyScript, record_steps: bool) -> Self {
        let mut steps = record_steps.then(|| Vec::with_capacity(script.len()));
        for &event in script {
            engine.apply(event);
            if let Some(steps) = steps.as_mut() {
                steps.push(EvalStep {
                    event: event.token().to_string(),
                    display: engine.display().to_string(),
                });
            }
        }
        Self {
            display: engine.display().to_string(),
            steps,
        }
    }

    /// Renders the report in `format`
    pub fn render(
        &self,
        format: OutputFormat,
        use_color: bool,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.render_text(use_color)),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    fn render_text(&self, use_color: bool) -> String {
        let mut out = String::new();
        if let Some(steps) = &self.steps {
            let width = steps.iter().map(|s| s.event.chars().count()).max().unwrap_or(0);
            for step in steps {
                let token = format!("{:>width$}", step.event);
                let token = if use_color {
                    style(token).dim().force_styling(true).to_string()
                } else {
                    token
                };
                out.push_str(&format!(
                    "{token}  {}\n",
                    styled_display(&step.display, use_color)
                ));
            }
        }
        out.push_str(&styled_display(&self.display, use_color));
        out.push('\n');
        out
    }
}

fn styled_display(text: &str, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    if text == ERROR_TOKEN {
        style(text).red().bold().force_styling(true).to_string()
    } else {
        style(text).bold().force_styling(true).to_string()
    }
}

/// Key bindings and script syntax, as printed by `deskcalc keys`
pub fn render_key_listing(use_color: bool) -> String {
    let header = |title: &str| {
        if use_color {
            style(title).bold().underlined().force_styling(true).to_string()
        } else {
            format!("=== {title} ===")
        }
    };

    let mut out = String::new();
    out.push_str(&header("Keypad"));
    out.push('\n');
    for button in Keypad::new().buttons() {
        out.push_str(&format!(
            "  {:<4} {:<7} {}\n",
            button.label(),
            button.event.token(),
            describe(button.event)
        ));
    }

    out.push('\n');
    out.push_str(&header("Keyboard"));
    out.push('\n');
    for (key, desc) in HELP_SHORTCUTS {
        out.push_str(&format!("  {key:<8} {desc}\n"));
    }

    out.push('\n');
    out.push_str(&header("Scripts"));
    out.push('\n');
    out.push_str("  Single keys: 0-9 + - * / x × ÷ = . % √ ± ⌫\n");
    out.push_str("  Named keys:  [C] [CE] [BS] [SQRT] [NEG] [PCT]\n");
    out.push_str("  Whitespace is ignored: deskcalc eval \"12 × 3 =\"\n");
    out
}

fn describe(event: CalculatorEvent) -> &'static str {
    match event {
        CalculatorEvent::Digit(_) => "digit",
        CalculatorEvent::Operator(_) => "operator",
        CalculatorEvent::Equals => "evaluate pending operation",
        CalculatorEvent::Clear => "clear everything",
        CalculatorEvent::ClearEntry => "clear entry",
        CalculatorEvent::DecimalPoint => "decimal point",
        CalculatorEvent::Backspace => "delete last character",
        CalculatorEvent::SquareRoot => "square root",
        CalculatorEvent::Percent => "divide by 100",
        CalculatorEvent::Sign => "toggle sign",
    }
}
