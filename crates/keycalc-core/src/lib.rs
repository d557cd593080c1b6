//! # keycalc-core
//!
//! Core library for the KeyCalc four-function calculator.
//! Implements the operand-entry state machine, left-to-right operator
//! chaining, the bounded calculation history, and display formatting.

pub mod constants;
pub mod engine;
pub mod error;
pub mod format;
pub mod history;
pub mod input;
pub mod keyboard;
pub mod operator;

// Re-exports
pub use constants::{exit_codes, DEFAULT_HISTORY_CAPACITY, ERROR_TEXT};
pub use engine::{Calculator, DisplayView, EngineState, Operand, PendingOperation};
pub use error::CalcError;
pub use format::format_number;
pub use history::{History, HistoryEntry};
pub use input::{Digit, InputEvent};
pub use keyboard::{map_key_name, parse_key_script, suppresses_default, KeyCommand};
pub use operator::Operator;

/// Run a key script through a fresh calculator and return the final display.
///
/// This is a convenience function for simple use cases. Keys that only
/// affect presentation (such as the history toggle) are ignored.
///
/// # Example
/// ```
/// let view = keycalc_core::evaluate_keys("5+3=").unwrap();
/// assert_eq!(view.current_text, "8");
/// ```
pub fn evaluate_keys(script: &str) -> Result<DisplayView, CalcError> {
    let mut calc = Calculator::new();
    let mut view = calc.view();
    for key in parse_key_script(script)? {
        match map_key_name(&key) {
            Some(KeyCommand::Input(event)) => view = calc.apply(event),
            Some(KeyCommand::ToggleHistory) => {}
            None => return Err(CalcError::UnknownKey(key)),
        }
    }
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_keys_simple_sum() {
        let view = evaluate_keys("5+3=").unwrap();
        assert_eq!(view.current_text, "8");
        assert_eq!(view.previous_text, "");
    }

    #[test]
    fn evaluate_keys_ignores_history_toggle() {
        let view = evaluate_keys("h12h").unwrap();
        assert_eq!(view.current_text, "12");
    }

    #[test]
    fn evaluate_keys_rejects_unknown() {
        assert!(matches!(
            evaluate_keys("5x3"),
            Err(CalcError::UnknownKey(k)) if k == "x"
        ));
    }
}
