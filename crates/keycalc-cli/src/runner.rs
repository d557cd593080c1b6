//! Key-script execution.

use keycalc_core::keyboard::{map_key_name, parse_key_script, KeyCommand};
use keycalc_core::{CalcError, Calculator, DisplayView};
use tracing::debug;

/// Run a key script through the calculator.
///
/// The whole script is validated before any key is applied, so an unknown
/// key leaves the calculator untouched. `on_step` is called after every key
/// with the key name and the resulting display. The history toggle has no
/// panel to act on here and only produces a step.
pub fn run_script(
    calc: &mut Calculator,
    script: &str,
    mut on_step: impl FnMut(&str, &DisplayView),
) -> Result<DisplayView, CalcError> {
    let commands = parse_key_script(script)?
        .into_iter()
        .map(|key| match map_key_name(&key) {
            Some(command) => Ok((key, command)),
            None => Err(CalcError::UnknownKey(key)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut view = calc.view();
    for (key, command) in &commands {
        match command {
            KeyCommand::Input(event) => view = calc.apply(*event),
            KeyCommand::ToggleHistory => debug!("history toggle ignored in script mode"),
        }
        on_step(key, &view);
    }
    Ok(view)
}
