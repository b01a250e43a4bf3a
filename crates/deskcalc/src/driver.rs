//! Unified calculator driver
//!
//! **Write the behaviour check once, run it against every front end.**
//! The `verify_*` functions below describe how the calculator must respond to
//! key sequences; each driver feeds those sequences through its own path.

use crate::core::{CalculatorEngine, Digit, Operator, ERROR_TOKEN};
use crate::event::CalculatorEvent;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use deskcalc::driver::{verify_chained_evaluation, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// verify_chained_evaluation(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, event: CalculatorEvent);

    /// Current display text
    fn display(&self) -> String;

    /// Returns to the power-on state
    fn reset(&mut self);

    /// Presses every key in order
    fn press_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = CalculatorEvent>,
        Self: Sized,
    {
        for event in events {
            self.press(event);
        }
    }
}

/// Driver over a bare engine
#[derive(Debug, Clone, Default)]
pub struct EngineDriver {
    engine: CalculatorEngine,
}

impl EngineDriver {
    /// Creates a driver with a default engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing engine
    #[must_use]
    pub const fn with_engine(engine: CalculatorEngine) -> Self {
        Self { engine }
    }

    /// Underlying engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, event: CalculatorEvent) {
        self.engine.apply(event);
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn reset(&mut self) {
        self.engine = CalculatorEngine::with_config(self.engine.config().clone())
            .unwrap_or_default();
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::event::CalculatorEvent;
    use crate::tui::CalculatorApp;

    /// Driver that presses keys through the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub const fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: CalculatorEvent) {
            self.app.press(event);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

fn digits<D: CalculatorDriver>(driver: &mut D, text: &str) {
    driver.press_all(
        text.chars()
            .filter_map(Digit::from_char)
            .map(CalculatorEvent::Digit),
    );
}

// ===== Shared behaviour checks =====
// These work with ANY CalculatorDriver implementation

/// Digits concatenate, a lone zero is replaced, entry stops at the length cap
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    digits(driver, "0");
    digits(driver, "42");
    assert_eq!(driver.display(), "42");

    driver.reset();
    digits(driver, "1234567890123456789");
    assert_eq!(driver.display(), "123456789012345");

    driver.reset();
    driver.press(CalculatorEvent::DecimalPoint);
    digits(driver, "5");
    driver.press(CalculatorEvent::DecimalPoint);
    assert_eq!(driver.display(), "0.5");
    driver.reset();
}

/// Operators evaluate left to right without precedence
pub fn verify_chained_evaluation<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    digits(driver, "2");
    driver.press(CalculatorEvent::Operator(Operator::Add));
    digits(driver, "3");
    driver.press(CalculatorEvent::Operator(Operator::Add));
    assert_eq!(driver.display(), "5");
    digits(driver, "4");
    driver.press(CalculatorEvent::Equals);
    assert_eq!(driver.display(), "9");

    driver.reset();
    digits(driver, "2");
    driver.press(CalculatorEvent::Operator(Operator::Add));
    digits(driver, "3");
    driver.press(CalculatorEvent::Operator(Operator::Multiply));
    digits(driver, "4");
    driver.press(CalculatorEvent::Equals);
    assert_eq!(driver.display(), "20");
    driver.reset();
}

/// Division by zero shows `0`
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    digits(driver, "5");
    driver.press(CalculatorEvent::Operator(Operator::Divide));
    digits(driver, "0");
    driver.press(CalculatorEvent::Equals);
    assert_eq!(driver.display(), "0");
    driver.reset();
}

/// A negative square root shows the error token until the next digit
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    digits(driver, "4");
    driver.press(CalculatorEvent::Sign);
    driver.press(CalculatorEvent::SquareRoot);
    assert_eq!(driver.display(), ERROR_TOKEN);
    digits(driver, "5");
    assert_eq!(driver.display(), "5");
    driver.reset();
}

/// Percent divides by one hundred
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    digits(driver, "50");
    driver.press(CalculatorEvent::Percent);
    assert_eq!(driver.display(), "0.5");
    driver.reset();
}

/// Backspace trims one character, then falls back to `0`
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    digits(driver, "123");
    driver.press(CalculatorEvent::Backspace);
    driver.press(CalculatorEvent::Backspace);
    assert_eq!(driver.display(), "1");
    driver.press(CalculatorEvent::Backspace);
    assert_eq!(driver.display(), "0");
    digits(driver, "7");
    assert_eq!(driver.display(), "7");
    driver.reset();
}

/// Sign toggles twice back to the original entry
pub fn verify_sign_toggle<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    digits(driver, "36");
    driver.press(CalculatorEvent::Sign);
    assert_eq!(driver.display(), "-36");
    driver.press(CalculatorEvent::Sign);
    assert_eq!(driver.display(), "36");

    driver.reset();
    driver.press(CalculatorEvent::Sign);
    assert_eq!(driver.display(), "0");
    driver.reset();
}

/// `C` discards everything, `CE` keeps the pending operation
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    digits(driver, "9");
    driver.press(CalculatorEvent::Operator(Operator::Subtract));
    digits(driver, "5");
    driver.press(CalculatorEvent::ClearEntry);
    assert_eq!(driver.display(), "0");
    digits(driver, "2");
    driver.press(CalculatorEvent::Equals);
    assert_eq!(driver.display(), "7");

    digits(driver, "9");
    driver.press(CalculatorEvent::Operator(Operator::Subtract));
    digits(driver, "5");
    driver.press(CalculatorEvent::Clear);
    assert_eq!(driver.display(), "0");
    driver.press(CalculatorEvent::Equals);
    assert_eq!(driver.display(), "0");
    driver.reset();
}

/// Complete verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_chained_evaluation(driver);
    verify_division_by_zero(driver);
    verify_error_recovery(driver);
    verify_percent(driver);
    verify_backspace(driver);
    verify_sign_toggle(driver);
    verify_clear(driver);
}
