//! Error types for the CLI

use deskcalc::prelude::{ConfigError, ScriptError};
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine limits rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Key script could not be parsed
    #[error("Invalid key script: {0}")]
    Script(#[from] ScriptError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
