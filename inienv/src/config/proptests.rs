//! Property-based tests for configuration loading and merging.

use super::loader::ConfigLoader;
use super::merger::ConfigMerger;
use super::schema::{IniDocument, Section};
use proptest::prelude::*;

// Variable names as they appear in real files, optionally marked for deletion
fn name_strategy() -> impl Strategy<Value = String> {
    "-?[A-Za-z_][A-Za-z0-9_]{0,12}"
}

// One value line: no surrounding whitespace (INI trims it) and no trailing
// backslash. Comment characters are literal inside a value.
fn value_line_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_%;#./\\\\]([A-Za-z0-9_%;#./ \\\\]{0,10}[A-Za-z0-9_%;#./])?"
}

// A continuation line must not look like a comment once its indent is stripped
fn continuation_line_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_%./]([A-Za-z0-9_%;#./ \\\\]{0,10}[A-Za-z0-9_%;#./])?"
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        value_line_strategy(),
        ("[A-Z]{1,8}", "[A-Za-z0-9_.]{1,6}").prop_map(|(var, tail)| format!("%{var}%\\{tail}")),
        (
            value_line_strategy(),
            prop::collection::vec(continuation_line_strategy(), 1..3)
        )
            .prop_map(|(first, rest)| format!("{first}\n{}", rest.join("\n"))),
    ]
}

// Names are unique within a section, as they are in any file worth applying
fn entries_strategy(min: usize) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map(name_strategy(), value_strategy(), min..6)
        .prop_map(|entries| entries.into_iter().collect())
}

fn document_strategy() -> impl Strategy<Value = IniDocument> {
    (
        prop::collection::btree_map("[a-z]{1,8}", entries_strategy(1), 0..4),
        entries_strategy(0),
    )
        .prop_map(|(sections, defaults)| {
            let mut doc = IniDocument::new();
            for (name, entries) in sections {
                let mut section = Section::new(name);
                for (key, value) in entries {
                    section = section.with_entry(key, value);
                }
                doc = doc.with_section(section);
            }
            for (key, value) in defaults {
                doc = doc.with_default(key, value);
            }
            doc
        })
}

fn render_entry(text: &mut String, name: &str, value: &str) {
    text.push_str(&format!("{name} = {}\n", value.replace('\n', "\n    ")));
}

fn render(doc: &IniDocument) -> String {
    let mut text = String::from("[DEFAULT]\n");
    for entry in &doc.defaults {
        render_entry(&mut text, &entry.name, &entry.raw_value);
    }
    for section in &doc.sections {
        text.push_str(&format!("[{}]\n", section.name));
        for entry in &section.entries {
            render_entry(&mut text, &entry.name, &entry.raw_value);
        }
    }
    text
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // A name present in the default section always resolves to its last default value
    #[test]
    fn default_section_takes_precedence(doc in document_strategy()) {
        let flat = ConfigMerger::merge(&doc);
        for entry in &doc.defaults {
            let last = doc
                .defaults
                .iter()
                .rev()
                .find(|e| e.name == entry.name)
                .map(|e| e.raw_value.as_str());
            prop_assert_eq!(flat.get(&entry.name).map(String::as_str), last);
        }
    }

    // Every name from every section appears in the flat mapping, and nothing else
    #[test]
    fn merge_covers_all_names(doc in document_strategy()) {
        let flat = ConfigMerger::merge(&doc);
        let mut names: Vec<&str> = doc
            .sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .chain(doc.defaults.iter())
            .map(|e| e.name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();

        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        prop_assert_eq!(keys, names);
    }

    // Rendering a document and parsing it back gives the same document
    #[test]
    fn parse_recovers_rendered_document(doc in document_strategy()) {
        let parsed = ConfigLoader::parse_str(&render(&doc)).unwrap();
        prop_assert_eq!(parsed, doc);
    }

    // Parsing the same text twice yields the same mapping
    #[test]
    fn parse_is_deterministic(doc in document_strategy()) {
        let text = render(&doc);
        let first = ConfigMerger::merge(&ConfigLoader::parse_str(&text).unwrap());
        let second = ConfigMerger::merge(&ConfigLoader::parse_str(&text).unwrap());
        prop_assert_eq!(first, second);
    }
}

#[test]
fn multi_line_value_survives_rendering() {
    let doc = IniDocument::new().with_section(
        Section::new("paths")
            .with_entry("NOTE", "first line\nsecond; still value\n%HOME%\\bin")
            .with_entry("AFTER", "1"),
    );
    let text = render(&doc);
    assert_eq!(
        text,
        "[DEFAULT]\n[paths]\nNOTE = first line\n    second; still value\n    %HOME%\\bin\nAFTER = 1\n"
    );
    assert_eq!(ConfigLoader::parse_str(&text).unwrap(), doc);
}
