//! Keyboard bindings independent of any terminal or UI toolkit.
//!
//! Keys are identified by name: a single printable character (`"7"`, `"+"`,
//! `"h"`) or a named key (`"Enter"`, `"Backspace"`, `"Escape"`). Adapters
//! translate their native key events into these names.

use crate::error::CalcError;
use crate::input::{Digit, InputEvent};
use crate::operator::Operator;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Forward an event to the engine.
    Input(InputEvent),
    /// Show or hide the history panel.
    ToggleHistory,
}

/// Map a key name to a calculator command.
#[must_use]
pub fn map_key_name(name: &str) -> Option<KeyCommand> {
    let event = match name {
        "." => InputEvent::DecimalPoint,
        "+" => InputEvent::Operator(Operator::Add),
        "-" => InputEvent::Operator(Operator::Sub),
        "*" => InputEvent::Operator(Operator::Mul),
        "/" => InputEvent::Operator(Operator::Div),
        "Enter" | "=" => InputEvent::Equals,
        "Backspace" => InputEvent::Backspace,
        "Escape" => InputEvent::Clear,
        "%" => InputEvent::Percent,
        "h" | "H" => return Some(KeyCommand::ToggleHistory),
        other => {
            let mut chars = other.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            InputEvent::Digit(Digit::try_from(c).ok()?)
        }
    };
    Some(KeyCommand::Input(event))
}

/// Whether the host must swallow its default action for this key.
///
/// `/` opens quick-find in browsers and similar surfaces.
#[must_use]
pub fn suppresses_default(name: &str) -> bool {
    name == "/"
}

/// Split a key script into key names.
///
/// Every character is one key, except `<Name>` which denotes a named key
/// such as `<Enter>`. Whitespace between keys is ignored.
///
/// ```
/// let keys = keycalc_core::parse_key_script("12 + 3<Enter>").unwrap();
/// assert_eq!(keys, ["1", "2", "+", "3", "Enter"]);
/// ```
pub fn parse_key_script(script: &str) -> Result<Vec<String>, CalcError> {
    let mut keys = Vec::new();
    let mut chars = script.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c == '<' {
            let rest = &script[offset + 1..];
            let end = rest.find('>').ok_or(CalcError::UnterminatedKey(offset))?;
            let name = &rest[..end];
            if name.is_empty() {
                return Err(CalcError::UnknownKey("<>".to_string()));
            }
            keys.push(name.to_string());
            // Skip past the name and the closing '>'.
            for _ in 0..=name.chars().count() {
                chars.next();
            }
        } else {
            keys.push(c.to_string());
        }
    }
    Ok(keys)
}
