//! The four arithmetic operators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary operator selected on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [Operator::Div, Operator::Mul, Operator::Sub, Operator::Add];

    /// Display symbol used in the previous-operand line and in history.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Returns `None` for a division by exactly zero.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Sub => Some(lhs - rhs),
            Self::Mul => Some(lhs * rhs),
            Self::Div if rhs == 0.0 => None,
            Self::Div => Some(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
