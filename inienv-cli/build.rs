//! Build script for inienv-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("inienv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create environment variables from an INI file")
        .long_about(
            "Create, update or delete the current user's persistent environment variables \
             from an INI file. Entries of [DEFAULT] override every other section; a name \
             starting with '-' deletes that variable.",
        )
        .arg(
            Arg::new("file_path")
                .long("file_path")
                .help("The path to the INI file, including the file itself")
                .value_name("PATH")
                .required(true),
        )
        .after_help(
            "ENVIRONMENT:\n    \
             INIENV_LOG_MODE  quiet, normal or verbose (default: normal)\n    \
             INIENV_LOG_DIR   directory for rolling log files (default: logs; empty disables)",
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("inienv.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
