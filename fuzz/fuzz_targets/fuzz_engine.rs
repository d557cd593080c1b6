#![no_main]

use libfuzzer_sys::fuzz_target;

use keycalc_core::{Calculator, Digit, History, InputEvent, Operator};

fn event_for(byte: u8) -> InputEvent {
    match byte % 16 {
        d @ 0..=9 => Digit::new(d).map_or(InputEvent::Clear, InputEvent::Digit),
        10 => InputEvent::DecimalPoint,
        11 => InputEvent::Percent,
        12 => InputEvent::Equals,
        13 => InputEvent::Backspace,
        14 => InputEvent::Clear,
        _ => InputEvent::Operator(Operator::ALL[usize::from(byte >> 6)]),
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&capacity, keys)) = data.split_first() else {
        return;
    };
    let mut calc = Calculator::with_history(History::with_capacity(usize::from(capacity % 16)));

    for &byte in keys {
        let view = calc.apply(event_for(byte));
        assert_eq!(view, calc.view(), "returned view differs from derived view");
        assert!(calc.history().len() <= calc.history().capacity());
        assert_eq!(
            calc.selected_operator().is_some(),
            !view.previous_text.is_empty(),
            "previous line out of sync with the pending operator"
        );
    }
});
