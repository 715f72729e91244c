//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the inienv library.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A configuration file written into its own temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct IniFixture {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    dir: TempDir,
    /// Path to the written file
    pub path: PathBuf,
}

/// Builder for INI files with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::IniBuilder;
/// let fixture = IniBuilder::new()
///     .default_entry("EDITOR", "nvim")
///     .section("tools", &[("EDITOR", "vim")])
///     .write();
/// ```
#[derive(Default)]
pub struct IniBuilder {
    defaults: Vec<(String, String)>,
    sections: Vec<(String, Vec<(String, String)>)>,
}

#[allow(dead_code)]
impl IniBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to `[DEFAULT]`.
    pub fn default_entry(mut self, name: &str, value: &str) -> Self {
        self.defaults.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds a named section.
    pub fn section(mut self, name: &str, entries: &[(&str, &str)]) -> Self {
        self.sections.push((
            name.to_string(),
            entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        ));
        self
    }

    /// Renders the file contents.
    pub fn render(&self) -> String {
        let mut text = String::new();
        if !self.defaults.is_empty() {
            text.push_str("[DEFAULT]\n");
            for (k, v) in &self.defaults {
                text.push_str(&format!("{k} = {v}\n"));
            }
            text.push('\n');
        }
        for (name, entries) in &self.sections {
            text.push_str(&format!("[{name}]\n"));
            for (k, v) in entries {
                text.push_str(&format!("{k} = {v}\n"));
            }
            text.push('\n');
        }
        text
    }

    /// Writes the file to a fresh temporary directory.
    pub fn write(&self) -> IniFixture {
        write_raw(&self.render())
    }
}

/// Writes raw text to `vars.ini` in a fresh temporary directory.
#[allow(dead_code)]
pub fn write_raw(contents: &str) -> IniFixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("vars.ini");
    fs::write(&path, contents).expect("Failed to write INI file");
    IniFixture { dir, path }
}
