//! Error type for input conversion and configuration.
//!
//! Engine operations themselves never fail; these errors only arise at
//! the boundary where raw characters, key names, or settings are turned
//! into typed values.

/// Error type for calculator boundaries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// A character outside `0..=9` was used as a digit.
    #[error("invalid digit: {0:?}")]
    InvalidDigit(char),

    /// A key name with no calculator binding.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// A `<` in a key script with no closing `>`.
    #[error("unterminated key name starting at offset {0}")]
    UnterminatedKey(usize),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
