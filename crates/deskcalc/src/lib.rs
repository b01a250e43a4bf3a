//! Desk Calculator - keystroke-driven calculator engine
//!
//! A small state machine that turns discrete key presses (digits, operators,
//! equals, clear, decimal point, backspace, sign, square root, percent) into a
//! single line of display text. Shells forward [`event::CalculatorEvent`]s and
//! read [`core::CalculatorEngine::display`] after each one.
//!
//! # Principles
//!
//! - **Error prevention**: digits, operators and events are closed types
//! - **In-band failures**: no key press ever returns an error; bad results show `Error`
//! - **Write once, run everywhere**: behaviour checks in [`driver`] run against
//!   the bare engine and the terminal app alike
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! let script: KeyScript = "2 + 3 + 4 =".parse().unwrap();
//! script.apply_to(&mut engine);
//! assert_eq!(engine.display(), "9");
//!
//! // Division by zero shows 0, a negative square root shows Error
//! engine.apply(CalculatorEvent::Clear);
//! KeyScript::parse("4 [NEG] [SQRT]").unwrap().apply_to(&mut engine);
//! assert_eq!(engine.display(), ERROR_TOKEN);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod event;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::{format_general, parse_permissive};
    pub use crate::core::{
        calculate, CalculatorEngine, ConfigError, Digit, DigitError, EngineConfig, Operator,
        PendingOperation, ERROR_TOKEN,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::event::{CalculatorEvent, KeyScript, ScriptError};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = CalculatorEngine::new();
        engine.apply(CalculatorEvent::Digit(Digit::new(6).unwrap()));
        engine.apply(CalculatorEvent::Operator(Operator::Multiply));
        engine.apply(CalculatorEvent::Digit(Digit::new(7).unwrap()));
        engine.apply(CalculatorEvent::Equals);
        assert_eq!(engine.display(), "42");
    }

    #[test]
    fn test_calculate_direct() {
        assert_eq!(calculate(6.0, 7.0, Operator::Multiply), 42.0);
        assert_eq!(calculate(6.0, 0.0, Operator::Divide), 0.0);
    }

    #[test]
    fn test_format_round_trip() {
        let text = format_general(2.0_f64.sqrt(), 10);
        assert_eq!(text, "1.414213562");
        assert_eq!(parse_permissive(&text), 1.414_213_562);
    }

    #[test]
    fn test_testable_properties() {
        let cases = [
            ("2+3+4=", "9"),
            ("5÷0=", "0"),
            ("4±√", "Error"),
            ("4±√5", "5"),
            ("50%", "0.5"),
            ("123⌫⌫", "1"),
            ("123⌫⌫⌫", "0"),
            ("17±±", "17"),
            ("1..2.", "1.2"),
        ];
        for (keys, expected) in cases {
            let mut engine = CalculatorEngine::new();
            KeyScript::parse(keys).unwrap().apply_to(&mut engine);
            assert_eq!(engine.display(), expected, "script {keys}");
        }
    }

    #[test]
    fn test_configured_engine() {
        let config = EngineConfig::new().with_significant_digits(4);
        let mut engine = CalculatorEngine::with_config(config).unwrap();
        KeyScript::parse("1÷3=").unwrap().apply_to(&mut engine);
        assert_eq!(engine.display(), "0.3333");
    }

    #[test]
    fn test_error_types() {
        let err: ScriptError = KeyScript::parse("?").unwrap_err();
        assert!(err.to_string().contains("'?'"));
        assert_eq!(Digit::new(11), Err(DigitError(11)));
        let config = EngineConfig::new().with_max_entry_len(0);
        assert!(matches!(
            CalculatorEngine::with_config(config),
            Err(ConfigError::EmptyEntry)
        ));
    }

    #[test]
    fn test_driver_in_prelude() {
        let mut driver = EngineDriver::new();
        driver.press(CalculatorEvent::Digit(Digit::ZERO));
        assert_eq!(driver.display(), "0");
    }
}
