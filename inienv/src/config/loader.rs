//! Configuration file loading.
//!
//! This module reads an INI file from disk, parses it with `rust-ini`, and
//! turns it into an [`IniDocument`] or a merged [`FlatConfig`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};

use crate::config::merger::ConfigMerger;
use crate::config::schema::{ConfigEntry, FlatConfig, IniDocument, Section, DEFAULT_SECTION};
use crate::error::{Error, Result};
use crate::path::absolutize;

/// Loads INI configuration files.
///
/// # Examples
///
/// ```
/// use inienv::config::ConfigLoader;
///
/// let doc = ConfigLoader::parse_str("[DEFAULT]\nfoo = 1\n[other]\nfoo = 2\nbar = 3\n").unwrap();
/// assert_eq!(doc.sections.len(), 1);
/// assert_eq!(doc.defaults.len(), 1);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a file and merge it into a flat mapping.
    ///
    /// Default-section values take precedence over named sections; see
    /// [`ConfigMerger::merge`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist,
    /// [`Error::ConfigRead`] if it cannot be read, [`Error::ConfigParse`] if
    /// it is not valid INI, or [`Error::InvalidPath`] if the path cannot be
    /// made absolute.
    pub fn load(path: &Path) -> Result<FlatConfig> {
        let doc = Self::load_document(path)?;
        Ok(ConfigMerger::merge(&doc))
    }

    /// Load a file into a document without merging.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load`].
    pub fn load_document(path: &Path) -> Result<IniDocument> {
        let absolute = absolutize(path)?;
        log::debug!("Loading configuration from {}", absolute.display());

        let contents = match fs::read_to_string(&absolute) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound { path: absolute });
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: absolute,
                    source,
                });
            }
        };

        Self::parse(&contents, absolute)
    }

    /// Parse INI text that did not come from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the text is not valid INI.
    pub fn parse_str(contents: &str) -> Result<IniDocument> {
        Self::parse(contents, PathBuf::from("<string>"))
    }

    fn parse(contents: &str, origin: PathBuf) -> Result<IniDocument> {
        let ini = match Ini::load_from_str_opt(contents, Self::parse_options()) {
            Ok(ini) => ini,
            Err(e) => {
                return Err(Error::ConfigParse {
                    path: origin,
                    line: e.line,
                    column: e.col,
                    message: e.msg.to_string(),
                });
            }
        };

        let mut doc = IniDocument::new();
        for (name, properties) in ini.iter() {
            let entries: Vec<ConfigEntry> = properties
                .iter()
                .map(|(key, value)| ConfigEntry::new(key, value))
                .collect();

            match name {
                None if entries.is_empty() => {}
                None => {
                    return Err(Error::ConfigParse {
                        path: origin,
                        line: first_entry_line(contents),
                        column: 1,
                        message: "file contains no section headers".to_string(),
                    });
                }
                Some(DEFAULT_SECTION) => doc.defaults.extend(entries),
                Some(section) => doc.sections.push(Section {
                    name: section.to_string(),
                    entries,
                }),
            }
        }

        log::debug!(
            "Parsed {} section(s), {} default entr(ies)",
            doc.sections.len(),
            doc.defaults.len()
        );
        Ok(doc)
    }

    /// Values are taken verbatim: Windows paths contain backslashes and
    /// quotes must reach the store unchanged. Indented lines continue the
    /// previous value and are joined to it with a newline.
    fn parse_options() -> ParseOption {
        ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            enabled_indented_mutiline_value: true,
            ..ParseOption::default()
        }
    }
}

/// Line number (1-based) of the first line that is neither blank nor a comment.
fn first_entry_line(contents: &str) -> usize {
    contents
        .lines()
        .position(|line| {
            let line = line.trim();
            !(line.is_empty() || line.starts_with(';') || line.starts_with('#'))
        })
        .map_or(1, |index| index + 1)
}
