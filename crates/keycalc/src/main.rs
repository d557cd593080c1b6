//! KeyCalc: four-function keypad calculator.

use keycalc_cli::ui::print_error;
use keycalc_lib::{app, config, errors};
use tracing::Level;

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(&config) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::handle_error(&err));
    }
}
