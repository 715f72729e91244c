//! Main entry point for the inienv CLI.
//!
//! Reads the INI file given by `--file_path` and applies it to the current
//! user's persistent environment variables. Only Windows has such a store;
//! elsewhere the tool exits with an error before reading the file.

mod cli;
mod error;

use clap::Parser;
use cli::Cli;
use error::CliError;
use inienv::{LogSettings, Runner};

fn run(cli: &Cli) -> Result<(), CliError> {
    inienv::init_logger(&LogSettings::from_env())?;

    let summary = Runner::for_host().run_host(&cli.file_path)?;
    log::debug!(
        "{} applied, {} missing, {} skipped",
        summary.report.applied(),
        summary.report.missing(),
        summary.report.skipped()
    );
    Ok(())
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle errors and set exit code
    match run(&cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            log::logger().flush();
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
