//! Decimal digit newtype

use thiserror::Error;

/// Error returned when a value outside `0..=9` is used as a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("digit out of range: {0} (expected 0-9)")]
pub struct DigitError(pub u8);

/// A single decimal digit, guaranteed to be in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// The digit zero
    pub const ZERO: Self = Self(0);

    /// Creates a digit, rejecting values above 9
    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitError(value))
        }
    }

    /// Maps an ASCII digit character to a digit
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Iterates over all ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=9).map(Self)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
