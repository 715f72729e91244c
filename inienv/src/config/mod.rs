//! INI configuration loading for inienv.
//!
//! A configuration file is a plain INI file:
//!
//! ```ini
//! [DEFAULT]
//! EDITOR = nvim
//!
//! [paths]
//! TOOLS_HOME = %USERPROFILE%\tools
//! -OLD_VAR =
//! ```
//!
//! # Precedence
//!
//! The file is flattened into a single name → value mapping:
//!
//! 1. Named sections are applied in file order (later sections win).
//! 2. The default section (`[DEFAULT]`, plus any entries above the first
//!    header) is applied last and always wins.
//!
//! # Examples
//!
//! ```
//! use inienv::config::{ConfigLoader, ConfigMerger};
//!
//! let doc = ConfigLoader::parse_str("[DEFAULT]\nfoo = 1\n[other]\nfoo = 2\nbar = 3\n").unwrap();
//! let flat = ConfigMerger::merge(&doc);
//!
//! assert_eq!(flat["foo"], "1");
//! assert_eq!(flat["bar"], "3");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

#[cfg(test)]
mod proptests;

pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use schema::{ConfigEntry, FlatConfig, IniDocument, Section, DEFAULT_SECTION};
