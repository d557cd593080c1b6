//! Styled lines for script-mode output.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Banner shown above a key trace.
#[must_use]
pub fn header_line(text: &str, color: bool) -> String {
    let line = format!("=== {text} ===");
    if color {
        style(line).bold().cyan().to_string()
    } else {
        line
    }
}

/// Error line for stderr.
#[must_use]
pub fn error_line(text: &str, color: bool) -> String {
    if color {
        format!("{} {text}", style("[ERROR]").red().bold())
    } else {
        format!("[ERROR] {text}")
    }
}

/// Print a trace banner to stdout.
pub fn print_header(text: &str) {
    println!("{}", header_line(text, !is_color_disabled()));
}

/// Print an error to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", error_line(text, !is_color_disabled()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_header() {
        assert_eq!(header_line("Trace", false), "=== Trace ===");
    }

    #[test]
    fn plain_error() {
        assert_eq!(
            error_line("unknown key: x", false),
            "[ERROR] unknown key: x"
        );
    }

    #[test]
    fn colored_lines_keep_text() {
        // console strips styling when stdout is not a terminal.
        assert!(header_line("Trace", true).contains("Trace"));
        let line = error_line("history size must be at least 1", true);
        assert!(line.contains("[ERROR]"));
        assert!(line.ends_with("history size must be at least 1"));
    }
}
