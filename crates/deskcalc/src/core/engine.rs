//! Keystroke state engine
//!
//! The engine holds the text being typed, the left-hand operand of a pending
//! operation and two flags. Every key is one method; none of them can fail.

use super::format::{format_general, parse_permissive};
use super::{calculate, ConfigError, Digit, EngineConfig, Operator, ERROR_TOKEN};
use tracing::trace;

/// Left-hand operand and operator captured by an operator press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    operand: String,
    operator: Operator,
}

impl PendingOperation {
    /// Operand text as it was displayed when the operator was pressed
    #[must_use]
    pub fn operand(&self) -> &str {
        &self.operand
    }

    /// Operator awaiting its right-hand operand
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }
}

/// Desk calculator state machine
///
/// ```rust
/// use deskcalc::core::{CalculatorEngine, Digit, Operator};
///
/// let mut engine = CalculatorEngine::new();
/// engine.press_digit(Digit::new(7).unwrap());
/// engine.press_operator(Operator::Multiply);
/// engine.press_digit(Digit::new(6).unwrap());
/// engine.press_equals();
/// assert_eq!(engine.display(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorEngine {
    entry: String,
    pending: Option<PendingOperation>,
    fresh_entry: bool,
    has_decimal_point: bool,
    config: EngineConfig,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with the default limits
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(EngineConfig::default())
    }

    /// Creates an engine with custom limits
    ///
    /// # Errors
    ///
    /// Returns the validation error when `config` is unusable.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EngineConfig) -> Self {
        Self {
            entry: "0".to_string(),
            pending: None,
            fresh_entry: true,
            has_decimal_point: false,
            config,
        }
    }

    // ===== Accessors =====

    /// Current display text, verbatim
    #[must_use]
    pub fn display(&self) -> &str {
        &self.entry
    }

    /// Stored left-hand operand, empty when no operation is pending
    #[must_use]
    pub fn stored_operand(&self) -> &str {
        self.pending.as_ref().map_or("", PendingOperation::operand)
    }

    /// Operator waiting for its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(PendingOperation::operator)
    }

    /// Pending operation, if any
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Whether the next digit starts a new number
    #[must_use]
    pub const fn is_fresh_entry(&self) -> bool {
        self.fresh_entry
    }

    /// Whether the entry being typed already has a decimal point
    #[must_use]
    pub const fn has_decimal_point(&self) -> bool {
        self.has_decimal_point
    }

    /// Whether the display shows the error token
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.entry == ERROR_TOKEN
    }

    /// Limits this engine was built with
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ===== Keys =====

    /// Digit key
    pub fn press_digit(&mut self, digit: Digit) {
        if self.fresh_entry || self.entry == "0" {
            self.entry.clear();
            self.entry.push(digit.as_char());
            self.fresh_entry = false;
            self.has_decimal_point = false;
        } else if self.entry.len() < self.config.max_entry_len {
            self.entry.push(digit.as_char());
        }
    }

    /// Operator key; completes the pending operation first when a second
    /// operand has been typed
    pub fn press_operator(&mut self, operator: Operator) {
        if !self.fresh_entry {
            if let Some(pending) = &self.pending {
                self.entry = self.evaluate(pending);
            }
        }

        self.pending = Some(PendingOperation {
            operand: self.entry.clone(),
            operator,
        });
        self.fresh_entry = true;
        self.has_decimal_point = false;
    }

    /// Equals key; does nothing without a pending operation
    pub fn press_equals(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if pending.operand.is_empty() {
            return;
        }

        self.entry = self.evaluate(&pending);
        self.fresh_entry = true;
        self.has_decimal_point = self.entry.contains('.');
    }

    /// `C`: back to the initial state
    pub fn press_clear(&mut self) {
        self.entry = "0".to_string();
        self.pending = None;
        self.fresh_entry = true;
        self.has_decimal_point = false;
    }

    /// `CE`: clears the entry, keeps the pending operation
    pub fn press_clear_entry(&mut self) {
        self.entry = "0".to_string();
        self.fresh_entry = true;
        self.has_decimal_point = false;
    }

    /// Decimal point key
    pub fn press_decimal_point(&mut self) {
        if self.has_decimal_point {
            return;
        }

        if self.fresh_entry {
            self.entry = "0.".to_string();
            self.fresh_entry = false;
            self.has_decimal_point = true;
        } else if self.entry.len() < self.config.max_decimal_len {
            self.entry.push('.');
            self.has_decimal_point = true;
        }
    }

    /// Backspace key
    pub fn press_backspace(&mut self) {
        if !self.fresh_entry && self.entry.len() > 1 {
            if self.entry.pop() == Some('.') {
                self.has_decimal_point = false;
            }
        } else {
            self.press_clear_entry();
        }
    }

    /// `√`: negative values show the error token
    pub fn press_square_root(&mut self) {
        let value = parse_permissive(&self.entry);
        if value >= 0.0 {
            self.show_result(value.sqrt());
        } else {
            self.entry = ERROR_TOKEN.to_string();
            self.has_decimal_point = false;
        }
        self.fresh_entry = true;
    }

    /// `%`: divides the entry by 100
    pub fn press_percent(&mut self) {
        let value = parse_permissive(&self.entry);
        self.show_result(value / 100.0);
        self.fresh_entry = true;
    }

    /// `±`: toggles a leading minus sign
    pub fn press_sign(&mut self) {
        if self.entry == "0" || self.is_error() {
            return;
        }

        if let Some(magnitude) = self.entry.strip_prefix('-') {
            self.entry = if magnitude.is_empty() {
                "0".to_string()
            } else {
                magnitude.to_string()
            };
        } else {
            self.entry.insert(0, '-');
        }
    }

    // ===== Evaluation =====

    fn evaluate(&self, pending: &PendingOperation) -> String {
        let lhs = parse_permissive(&pending.operand);
        let rhs = parse_permissive(&self.entry);
        self.render(calculate(lhs, rhs, pending.operator))
    }

    fn show_result(&mut self, value: f64) {
        self.entry = self.render(value);
        self.has_decimal_point = self.entry.contains('.');
    }

    fn render(&self, value: f64) -> String {
        if value.is_finite() {
            format_general(value, self.config.significant_digits)
        } else {
            trace!(value, "non-finite result");
            ERROR_TOKEN.to_string()
        }
    }
}
