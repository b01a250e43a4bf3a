//! deskcalc CLI library
//!
//! Command-line front end for the deskcalc keystroke engine: an interactive
//! terminal calculator, a key script evaluator and a key reference.

#![warn(missing_docs)]
#![allow(clippy::format_push_string)] // String building is clear and correct

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, FormatArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_key_listing, EvalReport, EvalStep, OutputFormat};
pub use runner::{build_engine, handle_event, run_eval, run_keys, run_tui};
