//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// deskcalc: a keystroke-driven desk calculator
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (log errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Longest number that can be typed
    #[arg(long, value_name = "N", global = true)]
    pub max_digits: Option<usize>,

    /// Significant digits shown for computed results
    #[arg(long, value_name = "N", global = true)]
    pub precision: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive terminal calculator
    Tui,

    /// Feed a key script and print the final display
    ///
    /// Digits, `+ - * / = . %` and the keypad glyphs `× ÷ √ ± ⌫` are single
    /// keys. Named keys go in brackets: [C] [CE] [BS] [SQRT] [NEG] [PCT].
    Eval(EvalArgs),

    /// Print the key bindings and script syntax
    Keys,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Key script; multiple arguments are joined with spaces
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub script: Vec<String>,
}

impl EvalArgs {
    /// The script arguments as one string
    #[must_use]
    pub fn script_text(&self) -> String {
        self.script.join(" ")
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// JSON object
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
