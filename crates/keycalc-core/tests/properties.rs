//! Property-based tests for the calculator engine.
//!
//! These tests drive `Calculator` through its public operations and check
//! the invariants that must hold for any input sequence.

use proptest::prelude::*;

use keycalc_core::engine::Calculator;
use keycalc_core::format::format_number;
use keycalc_core::history::History;
use keycalc_core::input::{Digit, InputEvent};
use keycalc_core::operator::Operator;

fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0u8..=9).prop_map(|d| Digit::new(d).unwrap())
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => digit_strategy().prop_map(InputEvent::Digit),
        1 => Just(InputEvent::DecimalPoint),
        1 => Just(InputEvent::Percent),
        2 => operator_strategy().prop_map(InputEvent::Operator),
        1 => Just(InputEvent::Equals),
        1 => Just(InputEvent::Backspace),
        1 => Just(InputEvent::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Typing digits only concatenates them, with a lone leading zero replaced.
    #[test]
    fn digits_concatenate(digits in prop::collection::vec(digit_strategy(), 1..20)) {
        let mut calc = Calculator::new();
        for &d in &digits {
            calc.input_digit(d);
        }

        let mut expected = String::new();
        for d in &digits {
            if expected == "0" {
                expected.clear();
            }
            expected.push(d.as_char());
        }
        prop_assert_eq!(calc.state().pending.as_str(), expected.as_str());
    }

    /// A second decimal point press never changes the operand.
    #[test]
    fn decimal_point_idempotent(events in prop::collection::vec(event_strategy(), 0..30)) {
        let mut calc = Calculator::new();
        for event in events {
            calc.apply(event);
        }
        calc.input_decimal_point();
        let once = calc.state().clone();
        calc.input_decimal_point();
        prop_assert_eq!(calc.state(), &once);
    }

    /// The operator is selected exactly when an accumulated operand exists,
    /// and the accumulated operand is never empty.
    #[test]
    fn operator_iff_accumulated(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut calc = Calculator::new();
        for event in events {
            let view = calc.apply(event);
            let state = calc.state();
            match &state.accumulated {
                Some(pending) => {
                    prop_assert!(!pending.operand.is_empty());
                    prop_assert!(!view.previous_text.is_empty());
                    prop_assert_eq!(calc.selected_operator(), Some(pending.operator));
                }
                None => {
                    prop_assert!(view.previous_text.is_empty());
                    prop_assert_eq!(calc.selected_operator(), None);
                }
            }
        }
    }

    /// The display is always derived from the state.
    #[test]
    fn view_matches_state(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut calc = Calculator::new();
        for event in events {
            let view = calc.apply(event);
            prop_assert_eq!(&view, &calc.view());
            prop_assert_eq!(view.current_text, format_number(calc.state().pending.as_str()));
        }
    }

    /// History never exceeds its capacity.
    #[test]
    fn history_bounded(
        capacity in 1usize..15,
        events in prop::collection::vec(event_strategy(), 0..200),
    ) {
        let mut calc = Calculator::with_history(History::with_capacity(capacity));
        for event in events {
            calc.apply(event);
            prop_assert!(calc.history().len() <= capacity);
        }
    }

    /// Choosing an operator while one is pending adds exactly one history entry.
    #[test]
    fn chaining_evaluates_once(
        a in digit_strategy(),
        b in digit_strategy(),
        first in operator_strategy(),
        second in operator_strategy(),
    ) {
        let mut calc = Calculator::new();
        calc.input_digit(a);
        calc.choose_operator(first);
        calc.input_digit(b);
        calc.choose_operator(second);

        prop_assert_eq!(calc.history().len(), 1);
        prop_assert_eq!(calc.selected_operator(), Some(second));
        prop_assert!(calc.state().pending.is_empty());
        let divided_by_zero = first == Operator::Div && b.value() == 0;
        if divided_by_zero {
            prop_assert_eq!(calc.view().previous_text, format!("Error {second}"));
        }
    }

    /// Integer results of addition are exact and grouped.
    #[test]
    fn addition_exact(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let mut calc = Calculator::new();
        for c in a.to_string().chars() {
            calc.input_digit(Digit::try_from(c).unwrap());
        }
        calc.choose_operator(Operator::Add);
        for c in b.to_string().chars() {
            calc.input_digit(Digit::try_from(c).unwrap());
        }
        calc.evaluate();
        let sum = u64::from(a) + u64::from(b);
        prop_assert_eq!(calc.state().pending.as_str(), sum.to_string());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Grouping only inserts separators: removing them restores the digits.
    #[test]
    fn grouping_preserves_digits(n in 0u64..u64::MAX) {
        let text = n.to_string();
        let formatted = format_number(&text);
        prop_assert_eq!(formatted.replace(',', ""), text);
    }

    /// The fractional tail is reattached verbatim.
    #[test]
    fn fraction_verbatim(int in 0u32..100_000, frac in "[0-9]{0,8}") {
        let text = format!("{int}.{frac}");
        let formatted = format_number(&text);
        let expected_tail = format!(".{frac}");
        prop_assert!(formatted.ends_with(&expected_tail));
    }
}
