//! Semantic calculator events
//!
//! Error prevention: each key is a variant carrying its payload, so a shell
//! cannot forward a digit outside `0..=9` or an unknown operator.
//!
//! # Key scripts
//!
//! A [`KeyScript`] is a compact text form of an event sequence, used by the
//! command-line front end and throughout the tests:
//!
//! ```rust
//! use deskcalc::core::CalculatorEngine;
//! use deskcalc::event::KeyScript;
//!
//! let script: KeyScript = "4 [NEG] [SQRT] 5".parse().unwrap();
//! let mut engine = CalculatorEngine::new();
//! script.apply_to(&mut engine);
//! assert_eq!(engine.display(), "5");
//! ```

use crate::core::{CalculatorEngine, Digit, Operator};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// One logical key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorEvent {
    /// Digit key
    Digit(Digit),
    /// Operator key
    Operator(Operator),
    /// `=`
    Equals,
    /// `C`
    Clear,
    /// `CE`
    ClearEntry,
    /// `.`
    DecimalPoint,
    /// `⌫`
    Backspace,
    /// `√`
    SquareRoot,
    /// `%`
    Percent,
    /// `±`
    Sign,
}

impl CalculatorEvent {
    /// Label printed on the keypad button
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS[d.value() as usize],
            Self::Operator(op) => op.label(),
            Self::Equals => "=",
            Self::Clear => "C",
            Self::ClearEntry => "CE",
            Self::DecimalPoint => ".",
            Self::Backspace => "⌫",
            Self::SquareRoot => "√",
            Self::Percent => "%",
            Self::Sign => "±",
        }
    }

    /// Key script token; parses back to the same event
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS[d.value() as usize],
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "[C]",
            Self::ClearEntry => "[CE]",
            Self::DecimalPoint => ".",
            Self::Backspace => "[BS]",
            Self::SquareRoot => "[SQRT]",
            Self::Percent => "%",
            Self::Sign => "[NEG]",
        }
    }

    /// Maps a single script character to an event
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        if let Some(d) = Digit::from_char(c) {
            return Some(Self::Digit(d));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '=' => Some(Self::Equals),
            '.' => Some(Self::DecimalPoint),
            '%' => Some(Self::Percent),
            '√' => Some(Self::SquareRoot),
            '±' => Some(Self::Sign),
            '⌫' => Some(Self::Backspace),
            _ => None,
        }
    }

    /// Maps a bracketed script name (without brackets) to an event
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "C" => Some(Self::Clear),
            "CE" => Some(Self::ClearEntry),
            "BS" => Some(Self::Backspace),
            "SQRT" => Some(Self::SquareRoot),
            "NEG" => Some(Self::Sign),
            "PCT" => Some(Self::Percent),
            _ => None,
        }
    }
}

impl From<Digit> for CalculatorEvent {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for CalculatorEvent {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for CalculatorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl CalculatorEngine {
    /// Dispatches one event to the matching key method
    pub fn apply(&mut self, event: CalculatorEvent) {
        match event {
            CalculatorEvent::Digit(d) => self.press_digit(d),
            CalculatorEvent::Operator(op) => self.press_operator(op),
            CalculatorEvent::Equals => self.press_equals(),
            CalculatorEvent::Clear => self.press_clear(),
            CalculatorEvent::ClearEntry => self.press_clear_entry(),
            CalculatorEvent::DecimalPoint => self.press_decimal_point(),
            CalculatorEvent::Backspace => self.press_backspace(),
            CalculatorEvent::SquareRoot => self.press_square_root(),
            CalculatorEvent::Percent => self.press_percent(),
            CalculatorEvent::Sign => self.press_sign(),
        }

        debug!(%event, display = self.display(), "applied event");
        debug_assert!(!self.display().is_empty());
        debug_assert!(
            self.is_fresh_entry() || self.has_decimal_point() == self.display().contains('.'),
            "decimal flag out of sync with {:?}",
            self.display()
        );
    }
}

/// Errors from parsing a key script
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// Character with no key
    #[error("unknown key '{symbol}' at position {position}")]
    UnknownSymbol {
        /// Offending character
        symbol: char,
        /// Character offset in the script
        position: usize,
    },
    /// Bracketed name with no key
    #[error("unknown key name [{name}] at position {position}")]
    UnknownName {
        /// Name between the brackets
        name: String,
        /// Character offset of the opening bracket
        position: usize,
    },
    /// `[` without a matching `]`
    #[error("unterminated '[' at position {position}")]
    Unterminated {
        /// Character offset of the opening bracket
        position: usize,
    },
}

/// Parsed sequence of calculator events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyScript {
    events: Vec<CalculatorEvent>,
}

impl KeyScript {
    /// Parses a key script
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError`] for characters and names that are not keys.
    pub fn parse(input: &str) -> Result<Self, ScriptError> {
        let mut events = Vec::new();
        let mut chars = input.chars().enumerate();

        while let Some((position, c)) = chars.next() {
            if c.is_whitespace() {
                continue;
            }

            if c == '[' {
                let mut name = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == ']' {
                        closed = true;
                        break;
                    }
                    name.push(inner);
                }
                if !closed {
                    return Err(ScriptError::Unterminated { position });
                }
                let name = name.trim();
                let event = CalculatorEvent::from_name(name).ok_or_else(|| {
                    ScriptError::UnknownName {
                        name: name.to_string(),
                        position,
                    }
                })?;
                events.push(event);
                continue;
            }

            let event = CalculatorEvent::from_symbol(c)
                .ok_or(ScriptError::UnknownSymbol { symbol: c, position })?;
            events.push(event);
        }

        Ok(Self { events })
    }

    /// Events in press order
    #[must_use]
    pub fn events(&self) -> &[CalculatorEvent] {
        &self.events
    }

    /// Number of events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the script has no events
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Feeds every event to `engine`
    pub fn apply_to(&self, engine: &mut CalculatorEngine) {
        for &event in &self.events {
            engine.apply(event);
        }
    }
}

impl FromStr for KeyScript {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<CalculatorEvent>> for KeyScript {
    fn from(events: Vec<CalculatorEvent>) -> Self {
        Self { events }
    }
}

impl<'a> IntoIterator for &'a KeyScript {
    type Item = &'a CalculatorEvent;
    type IntoIter = std::slice::Iter<'a, CalculatorEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl fmt::Display for KeyScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{event}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ERROR_TOKEN;

    fn run(script: &str) -> CalculatorEngine {
        let mut engine = CalculatorEngine::new();
        KeyScript::parse(script).unwrap().apply_to(&mut engine);
        engine
    }

    fn digit(value: u8) -> CalculatorEvent {
        CalculatorEvent::Digit(Digit::new(value).unwrap())
    }

    // ===== Labels and tokens =====

    #[test]
    fn test_labels_match_keypad() {
        assert_eq!(digit(7).label(), "7");
        assert_eq!(CalculatorEvent::Operator(Operator::Divide).label(), "÷");
        assert_eq!(CalculatorEvent::Operator(Operator::Multiply).label(), "×");
        assert_eq!(CalculatorEvent::ClearEntry.label(), "CE");
        assert_eq!(CalculatorEvent::Backspace.label(), "⌫");
        assert_eq!(CalculatorEvent::SquareRoot.label(), "√");
        assert_eq!(CalculatorEvent::Sign.label(), "±");
    }

    #[test]
    fn test_tokens() {
        assert_eq!(digit(0).token(), "0");
        assert_eq!(CalculatorEvent::Operator(Operator::Multiply).token(), "*");
        assert_eq!(CalculatorEvent::Clear.to_string(), "[C]");
        assert_eq!(CalculatorEvent::Sign.to_string(), "[NEG]");
    }

    #[test]
    fn test_from_conversions() {
        let d = Digit::new(3).unwrap();
        assert_eq!(CalculatorEvent::from(d), CalculatorEvent::Digit(d));
        assert_eq!(
            CalculatorEvent::from(Operator::Add),
            CalculatorEvent::Operator(Operator::Add)
        );
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(CalculatorEvent::from_symbol('4'), Some(digit(4)));
        assert_eq!(
            CalculatorEvent::from_symbol('÷'),
            Some(CalculatorEvent::Operator(Operator::Divide))
        );
        assert_eq!(CalculatorEvent::from_symbol('√'), Some(CalculatorEvent::SquareRoot));
        assert_eq!(CalculatorEvent::from_symbol('('), None);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(CalculatorEvent::from_name("ce"), Some(CalculatorEvent::ClearEntry));
        assert_eq!(CalculatorEvent::from_name("Sqrt"), Some(CalculatorEvent::SquareRoot));
        assert_eq!(CalculatorEvent::from_name("pct"), Some(CalculatorEvent::Percent));
        assert_eq!(CalculatorEvent::from_name("MR"), None);
    }

    #[test]
    fn test_every_token_parses_back() {
        let events = [
            digit(9),
            CalculatorEvent::Operator(Operator::Subtract),
            CalculatorEvent::Equals,
            CalculatorEvent::Clear,
            CalculatorEvent::ClearEntry,
            CalculatorEvent::DecimalPoint,
            CalculatorEvent::Backspace,
            CalculatorEvent::SquareRoot,
            CalculatorEvent::Percent,
            CalculatorEvent::Sign,
        ];
        let script = KeyScript::from(events.to_vec());
        let reparsed = KeyScript::parse(&script.to_string()).unwrap();
        assert_eq!(reparsed, script);
    }

    // ===== Script parsing =====

    #[test]
    fn test_parse_ignores_whitespace() {
        let script = KeyScript::parse(" 1 2\t+ 3\n= ").unwrap();
        assert_eq!(script.len(), 5);
        assert_eq!(script.events()[2], CalculatorEvent::Operator(Operator::Add));
    }

    #[test]
    fn test_parse_empty() {
        let script: KeyScript = "   ".parse().unwrap();
        assert!(script.is_empty());
    }

    #[test]
    fn test_parse_names_allow_inner_spaces() {
        let script = KeyScript::parse("[ bs ]").unwrap();
        assert_eq!(script.events(), &[CalculatorEvent::Backspace]);
    }

    #[test]
    fn test_parse_unknown_symbol_reports_position() {
        assert_eq!(
            KeyScript::parse("12(3"),
            Err(ScriptError::UnknownSymbol {
                symbol: '(',
                position: 2
            })
        );
    }

    #[test]
    fn test_parse_position_counts_characters() {
        let err = KeyScript::parse("√÷?").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownSymbol {
                symbol: '?',
                position: 2
            }
        );
        assert_eq!(err.to_string(), "unknown key '?' at position 2");
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            KeyScript::parse("1[M+]"),
            Err(ScriptError::UnknownName {
                name: "M+".to_string(),
                position: 1
            })
        );
    }

    #[test]
    fn test_parse_unterminated_bracket() {
        let err = KeyScript::parse("5 [SQRT").unwrap_err();
        assert_eq!(err, ScriptError::Unterminated { position: 2 });
        assert_eq!(err.to_string(), "unterminated '[' at position 2");
    }

    #[test]
    fn test_script_iterates_in_order() {
        let script = KeyScript::parse("1+").unwrap();
        let collected: Vec<_> = script.into_iter().copied().collect();
        assert_eq!(
            collected,
            vec![digit(1), CalculatorEvent::Operator(Operator::Add)]
        );
    }

    // ===== Applying events =====

    #[test]
    fn test_apply_chained_evaluation() {
        assert_eq!(run("2+3+4=").display(), "9");
    }

    #[test]
    fn test_apply_division_by_zero() {
        assert_eq!(run("5÷0=").display(), "0");
    }

    #[test]
    fn test_apply_error_recovery() {
        assert_eq!(run("4±√").display(), ERROR_TOKEN);
        assert_eq!(run("4±√5").display(), "5");
    }

    #[test]
    fn test_apply_percent() {
        assert_eq!(run("50%").display(), "0.5");
    }

    #[test]
    fn test_apply_backspace() {
        let engine = run("123⌫⌫");
        assert_eq!(engine.display(), "1");
        let engine = run("123⌫⌫⌫");
        assert_eq!(engine.display(), "0");
        assert!(engine.is_fresh_entry());
    }

    #[test]
    fn test_apply_clear_entry_then_continue() {
        assert_eq!(run("8×9[CE]2=").display(), "16");
    }

    #[test]
    fn test_apply_clear() {
        assert_eq!(run("8×9[C]"), CalculatorEngine::new());
    }

    #[test]
    fn test_apply_decimal_entry() {
        assert_eq!(run("1.5×2=").display(), "3");
        assert_eq!(run(".25+.25=").display(), "0.5");
    }
}
