#![no_main]

use libfuzzer_sys::fuzz_target;

use keycalc_core::{evaluate_keys, parse_key_script, CalcError};

fuzz_target!(|data: &[u8]| {
    let Ok(script) = std::str::from_utf8(data) else {
        return;
    };
    match parse_key_script(script) {
        Ok(keys) => assert!(keys.iter().all(|k| !k.is_empty())),
        Err(CalcError::UnknownKey(_) | CalcError::UnterminatedKey(_)) => {}
        Err(other) => panic!("unexpected parse error: {other}"),
    }
    let _ = evaluate_keys(script);
});
