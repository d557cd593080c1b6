//! The calculator state machine.
//!
//! `Calculator` owns a single `EngineState` and the calculation `History`.
//! Every operation mutates the state in place and returns the freshly
//! derived `DisplayView`; no operation can fail.
//!
//! Operators chain left to right: choosing an operator while another one is
//! pending evaluates the pending pair first, so `9 + 1 × 2` yields 20.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::{ERROR_TEXT, MALFORMED_RESULT};
use crate::format::{format_number, format_value, parse_operand};
use crate::history::{History, HistoryEntry};
use crate::input::{Digit, InputEvent};
use crate::operator::Operator;

/// Operand currently being entered or showing a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Raw digit and decimal-point text, possibly empty.
    Text(String),
    /// Result of a division by zero.
    Error,
}

impl Operand {
    /// True for empty entry text. The error sentinel is not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(t) if t.is_empty())
    }

    /// Raw text of the operand.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(t) => t,
            Self::Error => ERROR_TEXT,
        }
    }
}

impl Default for Operand {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Left operand and operator waiting for the right operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// Accumulated operand text, never empty.
    pub operand: String,
    pub operator: Operator,
}

/// Mutable state of one calculator session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineState {
    /// Operand being typed, or the last result.
    pub pending: Operand,
    /// Accumulated operand with its selected operator.
    pub accumulated: Option<PendingOperation>,
    /// Next digit or decimal point starts a new number.
    pub reset_on_next_digit: bool,
}

/// Render instruction for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayView {
    /// Formatted pending operand.
    pub current_text: String,
    /// Formatted accumulated operand and operator symbol, or empty.
    pub previous_text: String,
}

/// Four-function calculator engine.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: EngineState,
    history: History,
}

impl Calculator {
    /// Create a calculator in the idle state with an empty default history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator that records into the given history.
    #[must_use]
    pub fn with_history(history: History) -> Self {
        Self {
            state: EngineState::default(),
            history,
        }
    }

    /// Current engine state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Completed computations, most recent first.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Operator waiting for its right operand, if any.
    #[must_use]
    pub fn selected_operator(&self) -> Option<Operator> {
        self.state.accumulated.as_ref().map(|p| p.operator)
    }

    /// Dispatch an input event to the matching operation.
    pub fn apply(&mut self, event: InputEvent) -> DisplayView {
        trace!(?event, "input");
        match event {
            InputEvent::Digit(d) => self.input_digit(d),
            InputEvent::DecimalPoint => self.input_decimal_point(),
            InputEvent::Percent => self.input_percent(),
            InputEvent::Operator(op) => self.choose_operator(op),
            InputEvent::Equals => self.evaluate(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Clear => self.clear(),
        }
    }

    /// Return to the idle state. History is kept.
    pub fn clear(&mut self) -> DisplayView {
        self.state = EngineState::default();
        self.view()
    }

    /// Remove the last typed character; an emptied operand becomes `"0"`.
    pub fn backspace(&mut self) -> DisplayView {
        match &mut self.state.pending {
            Operand::Text(text) => {
                text.pop();
                if text.is_empty() {
                    text.push('0');
                }
            }
            Operand::Error => self.state.pending = Operand::Text("0".to_string()),
        }
        self.view()
    }

    /// Append a digit, replacing a lone leading zero.
    pub fn input_digit(&mut self, digit: Digit) -> DisplayView {
        self.take_reset();
        match &mut self.state.pending {
            Operand::Text(text) if text == "0" => {
                text.clear();
                text.push(digit.as_char());
            }
            Operand::Text(text) => text.push(digit.as_char()),
            Operand::Error => self.state.pending = Operand::Text(digit.as_char().to_string()),
        }
        self.view()
    }

    /// Append a decimal point unless the operand already has one.
    pub fn input_decimal_point(&mut self) -> DisplayView {
        self.take_reset();
        if self.state.pending == Operand::Error {
            self.state.pending = Operand::default();
        }
        if let Operand::Text(text) = &mut self.state.pending {
            if text.is_empty() {
                text.push('0');
            }
            if !text.contains('.') {
                text.push('.');
            }
        }
        self.view()
    }

    /// Divide the pending operand by 100.
    ///
    /// An operand that does not parse as a number (the error sentinel)
    /// degrades to `"0"`.
    pub fn input_percent(&mut self) -> DisplayView {
        if self.state.pending.is_empty() {
            return self.view();
        }
        let percent = parse_operand(self.state.pending.as_str())
            .and_then(|v| format_value(v / 100.0))
            .unwrap_or_else(|| MALFORMED_RESULT.to_string());
        self.state.pending = Operand::Text(percent);
        self.view()
    }

    /// Select an operator, evaluating any operation already pending.
    pub fn choose_operator(&mut self, operator: Operator) -> DisplayView {
        if self.state.pending.is_empty() {
            return self.view();
        }

        if self.state.accumulated.is_some() {
            debug!(%operator, "chained operator, evaluating pending operation");
            self.evaluate_pending();
        }

        let operand = std::mem::take(&mut self.state.pending);
        self.state.accumulated = Some(PendingOperation {
            operand: operand.as_str().to_string(),
            operator,
        });
        self.view()
    }

    /// Compute the pending operation and record it in the history.
    pub fn evaluate(&mut self) -> DisplayView {
        self.evaluate_pending();
        self.view()
    }

    /// Derive the display from the current state.
    #[must_use]
    pub fn view(&self) -> DisplayView {
        let previous_text = self
            .state
            .accumulated
            .as_ref()
            .map(|p| format!("{} {}", format_number(&p.operand), p.operator))
            .unwrap_or_default();
        DisplayView {
            current_text: format_number(self.state.pending.as_str()),
            previous_text,
        }
    }

    fn take_reset(&mut self) {
        if self.state.reset_on_next_digit {
            self.state.pending = Operand::default();
            self.state.reset_on_next_digit = false;
        }
    }

    /// Returns whether an evaluation happened.
    fn evaluate_pending(&mut self) -> bool {
        let rhs = match &self.state.pending {
            Operand::Text(text) if !text.is_empty() => text.clone(),
            _ => return false,
        };
        let Some(PendingOperation {
            operand: lhs,
            operator,
        }) = self.state.accumulated.take()
        else {
            return false;
        };

        let result = compute(&lhs, operator, &rhs);
        debug!(%lhs, %operator, %rhs, result = result.as_str(), "evaluated");

        self.history.push(HistoryEntry::new(
            format!("{lhs} {operator} {rhs} ="),
            result.as_str(),
        ));
        self.state.pending = result;
        self.state.reset_on_next_digit = true;
        true
    }
}

/// Division by zero yields the error sentinel. Any other computation on an
/// operand that does not parse, or with a non-finite outcome, degrades to
/// `"0"`.
fn compute(lhs: &str, operator: Operator, rhs: &str) -> Operand {
    let Some(rhs) = parse_operand(rhs) else {
        return Operand::Text(MALFORMED_RESULT.to_string());
    };
    let lhs = parse_operand(lhs).unwrap_or(f64::NAN);
    match operator.apply(lhs, rhs) {
        None => Operand::Error,
        Some(value) => Operand::Text(
            format_value(value).unwrap_or_else(|| MALFORMED_RESULT.to_string()),
        ),
    }
}
