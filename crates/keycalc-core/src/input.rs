//! Abstract input events consumed by the engine.

use std::fmt;

use crate::error::CalcError;
use crate::operator::Operator;

/// A single decimal digit, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Numeric value of the digit.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for the digit.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Self)
            .ok_or(CalcError::InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Events that drive the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Digit(Digit),
    DecimalPoint,
    Percent,
    Operator(Operator),
    Equals,
    Backspace,
    Clear,
}
