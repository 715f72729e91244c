//! CLI structure and argument definitions.
//!
//! This module defines the CLI structure using clap's derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Command-line tool for applying an INI file to the user's environment variables.
#[derive(Parser, Debug)]
#[command(name = "inienv")]
#[command(
    version,
    about = "Create environment variables from an INI file",
    long_about = "Create, update or delete the current user's persistent environment \
                  variables from an INI file. Entries of [DEFAULT] override every other \
                  section; a name starting with '-' deletes that variable."
)]
pub struct Cli {
    /// The path to the INI file, including the file itself
    #[arg(long = "file_path", value_name = "PATH")]
    pub file_path: PathBuf,
}
