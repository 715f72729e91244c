//! Library exports for inienv-cli.
//!
//! This module exports the CLI structure and error mapping so they can be
//! tested and reused outside the binary.

pub mod cli;
pub mod error;

pub use cli::Cli;
pub use error::CliError;
