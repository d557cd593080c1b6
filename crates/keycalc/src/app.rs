//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use keycalc_cli::presenter::{CLIScriptPresenter, ScriptPresenter};
use keycalc_cli::ui::print_header;
use keycalc_cli::{run_script, OutputFormat, Snapshot};
use keycalc_core::Calculator;
use keycalc_tui::CalcApp;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        keycalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    config.validate()?;
    let calculator = config.build_calculator();

    match &config.keys {
        Some(script) => run_keys(config, calculator, script),
        None => run_tui(config, calculator),
    }
}

fn run_keys(config: &AppConfig, mut calculator: Calculator, script: &str) -> Result<()> {
    let presenter = CLIScriptPresenter::new(config.format, config.quiet);
    let trace = config.trace && !config.quiet;
    if trace && config.format == OutputFormat::Text {
        print_header("Trace");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut step_error = None;
    run_script(&mut calculator, script, |key, view| {
        if trace && step_error.is_none() {
            step_error = presenter.present_step(&mut out, key, view).err();
        }
    })?;
    if let Some(err) = step_error {
        return Err(err.into());
    }

    if trace && config.format == OutputFormat::Text {
        writeln!(out)?;
    }
    presenter.present_snapshot(&mut out, &Snapshot::capture(&calculator))?;
    Ok(())
}

fn run_tui(config: &AppConfig, calculator: Calculator) -> Result<()> {
    let mut app = CalcApp::new(calculator);
    app.show_history = !config.hide_history;

    // Run TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    info!(
        history = app.calculator().history().len(),
        "session ended"
    );
    Ok(())
}
