//! CLI output formatting.

use keycalc_core::{Calculator, DisplayView, HistoryEntry};
use serde::Serialize;

/// Output format for script mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Final state of a script run: display plus history, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub display: DisplayView,
    pub history: Vec<HistoryEntry>,
}

impl Snapshot {
    /// Capture the calculator's current display and history.
    #[must_use]
    pub fn capture(calc: &Calculator) -> Self {
        Self {
            display: calc.view(),
            history: calc.history().to_vec(),
        }
    }
}

/// Format one display as a single line, `previous | current`.
#[must_use]
pub fn format_view_line(view: &DisplayView) -> String {
    if view.previous_text.is_empty() {
        view.current_text.clone()
    } else {
        format!("{} | {}", view.previous_text, view.current_text)
    }
}

/// Format a snapshot as text.
///
/// Quiet mode prints only the current value.
#[must_use]
pub fn format_text(snapshot: &Snapshot, quiet: bool) -> String {
    if quiet {
        return snapshot.display.current_text.clone();
    }

    let mut out = String::new();
    if !snapshot.display.previous_text.is_empty() {
        out.push_str(&snapshot.display.previous_text);
        out.push('\n');
    }
    out.push_str(&snapshot.display.current_text);
    if !snapshot.history.is_empty() {
        out.push_str("\n\nHistory:");
        for entry in &snapshot.history {
            out.push_str("\n  ");
            out.push_str(&entry.to_string());
        }
    }
    out
}

/// Format a snapshot as pretty-printed JSON.
pub fn format_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}
