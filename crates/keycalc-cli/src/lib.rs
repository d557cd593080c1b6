//! # keycalc-cli
//!
//! Non-interactive front end: key-script execution, output formatting,
//! and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod runner;
pub mod ui;

pub use output::{OutputFormat, Snapshot};
pub use presenter::{CLIScriptPresenter, ScriptPresenter};
pub use runner::run_script;
