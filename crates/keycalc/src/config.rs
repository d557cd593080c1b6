//! Application configuration from CLI flags and environment.

use clap::Parser;
use keycalc_cli::OutputFormat;
use keycalc_core::{CalcError, Calculator, History, DEFAULT_HISTORY_CAPACITY};

/// KeyCalc: four-function keypad calculator.
///
/// Without --keys an interactive terminal keypad is started.
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
pub struct AppConfig {
    /// Key script to run without the TUI, e.g. "12+3<Enter>".
    #[arg(short, long, env = "KEYCALC_KEYS")]
    pub keys: Option<String>,

    /// Output format for script mode.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the display after every key in script mode.
    #[arg(short, long)]
    pub trace: bool,

    /// Start with sample entries in the history.
    #[arg(long)]
    pub demo_history: bool,

    /// Number of calculations kept in the history.
    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY, env = "KEYCALC_HISTORY_SIZE")]
    pub history_size: usize,

    /// Start the TUI with the history panel hidden.
    #[arg(long)]
    pub hide_history: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Verbose output (debug logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the current value).
    #[arg(short, long)]
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Check settings that clap cannot express.
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.history_size == 0 {
            return Err(CalcError::Config(
                "history size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the session calculator from the history settings.
    #[must_use]
    pub fn build_calculator(&self) -> Calculator {
        let mut history = History::with_capacity(self.history_size);
        if self.demo_history {
            history.seed_demo();
        }
        Calculator::with_history(history)
    }
}
