//! Applying a configuration using the plan-execute pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning**: [`translate`] turns a [`FlatConfig`](crate::FlatConfig)
//!    into an [`ApplyPlan`] of [`StoreOperation`]s. This is pure.
//! 2. **Execution**: [`PlanExecutor`] runs the plan against an
//!    [`EnvironmentStore`](crate::store::EnvironmentStore) and returns an
//!    [`ApplyReport`].
//!
//! # Examples
//!
//! ```
//! use inienv::config::ConfigLoader;
//! use inienv::operations::{translate, PlanExecutor};
//! use inienv::store::MemoryStore;
//! use inienv::ConfigMerger;
//!
//! let doc = ConfigLoader::parse_str("[vars]\nEDITOR = vim\n-PAGER =\n").unwrap();
//! let plan = translate(&ConfigMerger::merge(&doc));
//!
//! let mut store = MemoryStore::with_vars([("PAGER", "less")]);
//! let report = PlanExecutor::new(&mut store).execute(&plan).unwrap();
//!
//! assert!(report.is_clean());
//! assert_eq!(store.get("EDITOR"), Some("vim"));
//! assert!(!store.contains("PAGER"));
//! ```

pub mod executor;
pub mod plan;

#[cfg(test)]
mod proptests;

pub use executor::{ApplyReport, OperationOutcome, PlanExecutor};
pub use plan::{translate, ApplyPlan, StoreOperation, DELETE_PREFIX};
