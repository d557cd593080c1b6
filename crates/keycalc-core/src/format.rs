//! Display formatting for operands and results.

use crate::constants::{ERROR_TEXT, GROUP_SEPARATOR};

/// Format operand text for the display.
///
/// The integer part is grouped in thousands; the fractional part, if any,
/// is reattached exactly as typed (no rounding, trailing zeros kept).
/// `"Error"` passes through, and an integer part that is not a number
/// shows as `"0"`.
#[must_use]
pub fn format_number(text: &str) -> String {
    if text == ERROR_TEXT {
        return text.to_string();
    }

    let (integer, fraction) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text, None),
    };

    let integer_display = group_integer(integer).unwrap_or_else(|| "0".to_string());
    match fraction {
        Some(frac) => format!("{integer_display}.{frac}"),
        None => integer_display,
    }
}

/// Group an optionally signed run of ASCII digits.
///
/// Returns `None` when the text is not an integer.
fn group_integer(text: &str) -> Option<String> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let trimmed = digits.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    Some(grouped)
}

/// Render a computed value as plain decimal operand text.
///
/// Uses the shortest representation that round-trips, never exponent
/// notation, and prints negative zero as `"0"`. Returns `None` for values
/// that are not finite.
#[must_use]
pub fn format_value(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        return Some("0".to_string());
    }
    Some(value.to_string())
}

/// Parse operand text into a finite number.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number("1234567"), "1,234,567");
        assert_eq!(format_number("123"), "123");
        assert_eq!(format_number("1000"), "1,000");
        assert_eq!(format_number("100000"), "100,000");
    }

    #[test]
    fn keeps_fraction_verbatim() {
        assert_eq!(format_number("1234567.890"), "1,234,567.890");
        assert_eq!(format_number("0."), "0.");
        assert_eq!(format_number("3.14159"), "3.14159");
    }

    #[test]
    fn negative_values() {
        assert_eq!(format_number("-1234"), "-1,234");
        assert_eq!(format_number("-0.5"), "-0.5");
    }

    #[test]
    fn error_passes_through() {
        assert_eq!(format_number("Error"), "Error");
    }

    #[test]
    fn non_numeric_integer_part_is_zero() {
        assert_eq!(format_number(""), "0");
        assert_eq!(format_number("abc"), "0");
        assert_eq!(format_number("-"), "0");
        assert_eq!(format_number(".5"), "0.5");
    }

    #[test]
    fn leading_zeros_collapse() {
        assert_eq!(format_number("007"), "7");
        assert_eq!(format_number("0000"), "0");
    }

    #[test]
    fn format_value_plain_decimal() {
        assert_eq!(format_value(8.0).as_deref(), Some("8"));
        assert_eq!(format_value(0.1).as_deref(), Some("0.1"));
        assert_eq!(format_value(-2.5).as_deref(), Some("-2.5"));
        assert_eq!(format_value(1e-7).as_deref(), Some("0.0000001"));
        assert_eq!(format_value(0.1 + 0.2).as_deref(), Some("0.30000000000000004"));
    }

    #[test]
    fn format_value_negative_zero() {
        assert_eq!(format_value(-0.0).as_deref(), Some("0"));
    }

    #[test]
    fn format_value_non_finite() {
        assert_eq!(format_value(f64::INFINITY), None);
        assert_eq!(format_value(f64::NAN), None);
    }

    #[test]
    fn parse_operand_forms() {
        assert_eq!(parse_operand("12"), Some(12.0));
        assert_eq!(parse_operand("0."), Some(0.0));
        assert_eq!(parse_operand("Error"), None);
        assert_eq!(parse_operand("inf"), None);
        assert_eq!(parse_operand(""), None);
    }
}
