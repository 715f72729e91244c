//! Section merging and precedence handling.
//!
//! This module flattens a parsed [`IniDocument`] into a [`FlatConfig`].

use crate::config::schema::{ConfigEntry, FlatConfig, IniDocument};

/// Merges document sections according to precedence rules.
///
/// # Examples
///
/// ```
/// use inienv::config::{ConfigMerger, IniDocument, Section};
///
/// let doc = IniDocument::new()
///     .with_default("foo", "1")
///     .with_section(Section::new("other").with_entry("foo", "2").with_entry("bar", "3"));
///
/// let flat = ConfigMerger::merge(&doc);
/// assert_eq!(flat["foo"], "1");
/// assert_eq!(flat["bar"], "3");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge a document into a flat name → value mapping.
    ///
    /// # Merging Rules
    ///
    /// - Named sections are applied in file order; a later section
    ///   overwrites an earlier one for the same name.
    /// - Within a section, a repeated name keeps its last value.
    /// - Default-section entries are applied last, so they win over every
    ///   named section wherever they appear in the file.
    /// - Names are compared exactly (case-sensitive).
    #[must_use]
    pub fn merge(doc: &IniDocument) -> FlatConfig {
        let mut result = FlatConfig::new();

        for section in &doc.sections {
            Self::merge_into(&mut result, &section.entries);
        }
        Self::merge_into(&mut result, &doc.defaults);

        result
    }

    /// Merge entries into target (entries overwrite target).
    pub fn merge_into(target: &mut FlatConfig, entries: &[ConfigEntry]) {
        for entry in entries {
            target.insert(entry.name.clone(), entry.raw_value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Section;

    #[test]
    fn test_merge_empty_document() {
        assert!(ConfigMerger::merge(&IniDocument::new()).is_empty());
    }

    #[test]
    fn test_later_section_overwrites_earlier() {
        let doc = IniDocument::new()
            .with_section(Section::new("first").with_entry("EDITOR", "vim"))
            .with_section(Section::new("second").with_entry("EDITOR", "emacs"));

        let flat = ConfigMerger::merge(&doc);
        assert_eq!(flat.get("EDITOR").map(String::as_str), Some("emacs"));
    }

    #[test]
    fn test_defaults_win_regardless_of_position() {
        // Defaults are stored apart from sections, so even a default parsed
        // before the sections overrides them.
        let doc = IniDocument::new()
            .with_default("foo", "1")
            .with_section(Section::new("other").with_entry("foo", "2").with_entry("bar", "3"));

        let flat = ConfigMerger::merge(&doc);
        let expected: FlatConfig = [("bar", "3"), ("foo", "1")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn test_repeated_name_in_section_keeps_last() {
        let doc = IniDocument::new()
            .with_section(Section::new("s").with_entry("A", "1").with_entry("A", "2"));
        assert_eq!(ConfigMerger::merge(&doc)["A"], "2");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let doc = IniDocument::new()
            .with_section(Section::new("s").with_entry("Path", "a"))
            .with_default("PATH", "b");

        let flat = ConfigMerger::merge(&doc);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat["Path"], "a");
        assert_eq!(flat["PATH"], "b");
    }

    #[test]
    fn test_merge_into_overwrites() {
        let mut target = FlatConfig::new();
        target.insert("X".to_string(), "old".to_string());
        ConfigMerger::merge_into(&mut target, &[ConfigEntry::new("X", "new")]);
        assert_eq!(target["X"], "new");
    }
}
