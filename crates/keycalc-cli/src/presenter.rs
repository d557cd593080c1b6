//! CLI script presenter.

use std::io::{self, Write};

use keycalc_core::DisplayView;

use crate::output::{format_json, format_text, format_view_line, OutputFormat, Snapshot};

/// Presents the progress and outcome of a key script.
pub trait ScriptPresenter {
    /// Called after each key when tracing is enabled.
    fn present_step(&self, out: &mut dyn Write, key: &str, view: &DisplayView) -> io::Result<()>;

    /// Present the final state.
    fn present_snapshot(&self, out: &mut dyn Write, snapshot: &Snapshot) -> io::Result<()>;
}

/// CLI script presenter.
pub struct CLIScriptPresenter {
    format: OutputFormat,
    quiet: bool,
}

impl CLIScriptPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }
}

impl ScriptPresenter for CLIScriptPresenter {
    fn present_step(&self, out: &mut dyn Write, key: &str, view: &DisplayView) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{key:>9}  {}", format_view_line(view)),
            OutputFormat::Json => {
                let line = serde_json::json!({ "key": key, "display": view });
                writeln!(out, "{line}")
            }
        }
    }

    fn present_snapshot(&self, out: &mut dyn Write, snapshot: &Snapshot) -> io::Result<()> {
        let rendered = match self.format {
            OutputFormat::Text => format_text(snapshot, self.quiet),
            OutputFormat::Json => format_json(snapshot).map_err(io::Error::other)?,
        };
        writeln!(out, "{rendered}")
    }
}
