#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # inienv
//!
//! A library for applying INI files to the current user's persistent
//! environment variables.
//!
//! A run loads a file, flattens its sections (the `[DEFAULT]` section wins),
//! translates every entry into a store operation, and applies those
//! operations one by one. Names starting with `-` delete the variable
//! instead of setting it.
//!
//! ## Core Types
//!
//! - [`ConfigLoader`] and [`ConfigMerger`]: INI loading and flattening
//! - [`StoreOperation`], [`ApplyPlan`] and [`translate`]: the mutations to perform
//! - [`EnvironmentStore`]: the store capability, with [`store::MemoryStore`]
//!   and, on Windows, `store::RegistryStore`
//! - [`PlanExecutor`] and [`ApplyReport`]: applying a plan
//! - [`Runner`]: the end-to-end pipeline
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use inienv::{ConfigLoader, ConfigMerger, PlanExecutor, translate};
//! use inienv::store::MemoryStore;
//!
//! let doc = ConfigLoader::parse_str("[DEFAULT]\nfoo = 1\n[other]\nfoo = 2\nbar = 3\n").unwrap();
//! let config = ConfigMerger::merge(&doc);
//!
//! let mut store = MemoryStore::new();
//! let report = PlanExecutor::new(&mut store).execute(&translate(&config)).unwrap();
//!
//! assert_eq!(report.applied(), 2);
//! assert_eq!(store.get("foo"), Some("1"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod path;
pub mod runner;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{ConfigEntry, ConfigLoader, ConfigMerger, FlatConfig, IniDocument, Section};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, LogSettings, Logger};
pub use operations::{
    translate, ApplyPlan, ApplyReport, OperationOutcome, PlanExecutor, StoreOperation,
};
pub use runner::{Platform, RunState, RunSummary, Runner};
pub use store::{EnvironmentStore, StoreError};
