//! Parsed configuration document types.

use std::collections::BTreeMap;

/// Name of the section whose entries override every named section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Flat mapping of variable name to raw value.
///
/// Iteration is in lexicographic name order, so translation and reporting
/// are deterministic for a given file.
pub type FlatConfig = BTreeMap<String, String>;

/// A single `name = value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Variable name as written in the file.
    pub name: String,
    /// Value as written in the file, without quote or escape processing.
    pub raw_value: String,
}

impl ConfigEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// A named `[section]` and its entries in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section header without brackets.
    pub name: String,
    /// Entries in file order.
    pub entries: Vec<ConfigEntry>,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Adds an entry, returning the section for chaining.
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(ConfigEntry::new(name, value));
        self
    }
}

/// A parsed INI file.
///
/// Named sections keep their file order. Entries of the `[DEFAULT]`
/// section are collected separately, since they take precedence
/// regardless of position.
///
/// # Examples
///
/// ```
/// use inienv::config::{IniDocument, Section};
///
/// let doc = IniDocument::new()
///     .with_section(Section::new("tools").with_entry("EDITOR", "vim"))
///     .with_default("EDITOR", "nvim");
///
/// assert_eq!(doc.sections.len(), 1);
/// assert_eq!(doc.defaults.len(), 1);
/// assert_eq!(doc.entry_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    /// Named sections in file order.
    pub sections: Vec<Section>,
    /// Default-section entries in file order.
    pub defaults: Vec<ConfigEntry>,
}

impl IniDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named section.
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Appends a default-section entry.
    #[must_use]
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.push(ConfigEntry::new(name, value));
        self
    }

    /// Total number of entries across all sections, duplicates included.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.defaults.len() + self.sections.iter().map(|s| s.entries.len()).sum::<usize>()
    }

    /// Returns true if the document holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}
