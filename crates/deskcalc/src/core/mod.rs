//! Calculator core: the keystroke engine and its building blocks
//!
//! Error prevention: every input is a typed event, every failure is in-band

mod digit;
pub mod engine;
pub mod format;
mod operations;

pub use digit::{Digit, DigitError};
pub use engine::{CalculatorEngine, PendingOperation};
pub use operations::{calculate, Operator};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Text shown when a computation has no displayable result
pub const ERROR_TOKEN: &str = "Error";

/// Configuration errors - rejected before an engine is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Precision outside the range an `f64` can honour
    #[error("significant digits must be between 1 and {max}, got {value}")]
    SignificantDigits {
        /// Requested precision
        value: usize,
        /// Largest supported precision
        max: usize,
    },
    /// Entry length of zero
    #[error("maximum entry length must be at least 1")]
    EmptyEntry,
    /// Decimal bound beyond the entry bound
    #[error("decimal point limit ({decimal}) exceeds maximum entry length ({entry})")]
    DecimalLimit {
        /// Configured decimal point limit
        decimal: usize,
        /// Configured entry length limit
        entry: usize,
    },
}

/// Engine limits and display precision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Digit presses are ignored once the entry is this long
    pub max_entry_len: usize,
    /// The decimal point is only appended while the entry is shorter than this
    pub max_decimal_len: usize,
    /// Significant digits used when formatting computed results
    pub significant_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_entry_len: Self::DEFAULT_MAX_ENTRY_LEN,
            max_decimal_len: Self::DEFAULT_MAX_DECIMAL_LEN,
            significant_digits: format::DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl EngineConfig {
    /// Default entry length limit
    pub const DEFAULT_MAX_ENTRY_LEN: usize = 15;
    /// Default decimal point limit
    pub const DEFAULT_MAX_DECIMAL_LEN: usize = 14;
    /// Largest precision that still round-trips through an `f64`
    pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry length limit
    #[must_use]
    pub const fn with_max_entry_len(mut self, len: usize) -> Self {
        self.max_entry_len = len;
        self
    }

    /// Sets the decimal point limit
    #[must_use]
    pub const fn with_max_decimal_len(mut self, len: usize) -> Self {
        self.max_decimal_len = len;
        self
    }

    /// Sets the display precision
    #[must_use]
    pub const fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Checks that the limits describe a usable calculator
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = if self.significant_digits == 0
            || self.significant_digits > Self::MAX_SIGNIFICANT_DIGITS
        {
            Err(ConfigError::SignificantDigits {
                value: self.significant_digits,
                max: Self::MAX_SIGNIFICANT_DIGITS,
            })
        } else if self.max_entry_len == 0 {
            Err(ConfigError::EmptyEntry)
        } else if self.max_decimal_len > self.max_entry_len {
            Err(ConfigError::DecimalLimit {
                decimal: self.max_decimal_len,
                entry: self.max_entry_len,
            })
        } else {
            Ok(())
        };

        if let Err(ref error) = result {
            warn!(%error, "rejecting engine configuration");
        }
        result
    }
}
