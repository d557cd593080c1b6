//! Constants for history sizing, display sentinels, and exit codes.

/// Default number of entries kept in the calculation history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Display text for a division by zero.
pub const ERROR_TEXT: &str = "Error";

/// Operand left by a computation on a malformed or overflowing value.
pub const MALFORMED_RESULT: &str = "0";

/// Separator inserted between groups of three integer digits.
pub const GROUP_SEPARATOR: char = ',';

/// Sample history shown when the demo history is requested.
///
/// Ordered oldest first; the last entry ends up at the front of the history.
pub const DEMO_HISTORY: [(&str, &str); 3] = [
    ("12 × 12 =", "144"),
    ("45 + 67 =", "112"),
    ("100 ÷ 4 =", "25"),
];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Key script contained an unknown or malformed key.
    pub const ERROR_INPUT: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_ten() {
        assert_eq!(DEFAULT_HISTORY_CAPACITY, 10);
    }

    #[test]
    fn demo_history_entries_end_with_equals() {
        for (expr, result) in DEMO_HISTORY {
            assert!(expr.ends_with(" ="));
            assert!(!result.is_empty());
        }
    }

    #[test]
    fn exit_codes_distinct() {
        assert_ne!(exit_codes::SUCCESS, exit_codes::ERROR_GENERIC);
        assert_ne!(exit_codes::ERROR_GENERIC, exit_codes::ERROR_INPUT);
        assert_ne!(exit_codes::ERROR_INPUT, exit_codes::ERROR_CONFIG);
    }
}
