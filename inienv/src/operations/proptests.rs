//! Property-based tests for operations module.
//!
//! These tests focus on translation totality and apply invariants.

use super::executor::PlanExecutor;
use super::plan::{translate, StoreOperation};
use crate::config::FlatConfig;
use crate::store::MemoryStore;
use proptest::prelude::*;

// Strategy for generating flat configs, with some names marked for deletion
fn config_strategy() -> impl Strategy<Value = FlatConfig> {
    prop::collection::btree_map("-{0,2}[A-Za-z_]{0,8}", "[ -~]{0,12}", 0..12)
}

// Strategy for configs made only of upserts
fn upsert_config_strategy() -> impl Strategy<Value = FlatConfig> {
    prop::collection::btree_map("[A-Za-z_][A-Za-z0-9_]{0,8}", "[ -~]{0,12}", 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Exactly one operation per entry, in iteration order
    #[test]
    fn translation_is_total(config in config_strategy()) {
        let plan = translate(&config);
        prop_assert_eq!(plan.len(), config.len());

        for ((name, value), action) in config.iter().zip(&plan.actions) {
            match action {
                StoreOperation::Upsert { name: n, value: v } => {
                    prop_assert!(!name.starts_with('-'));
                    prop_assert_eq!(n, name);
                    prop_assert_eq!(v, value);
                }
                StoreOperation::Delete { name: n } => {
                    prop_assert!(name.starts_with('-'));
                    prop_assert_eq!(n.as_str(), &name[1..]);
                }
            }
        }
    }

    // Warnings are raised only for entries that leave no variable name
    #[test]
    fn warnings_only_for_empty_targets(config in config_strategy()) {
        let plan = translate(&config);
        let expected = usize::from(config.contains_key("-")) + usize::from(config.contains_key(""));
        prop_assert_eq!(plan.warnings.len(), expected);
    }

    // Applying the same upserts twice leaves the same store as applying once
    #[test]
    fn apply_upserts_idempotent(config in upsert_config_strategy()) {
        let plan = translate(&config);

        let mut once = MemoryStore::new();
        PlanExecutor::new(&mut once).execute(&plan).unwrap();

        let mut twice = once.clone();
        PlanExecutor::new(&mut twice).execute(&plan).unwrap();

        prop_assert_eq!(once, twice);
    }

    // Missing delete targets never abort the run
    #[test]
    fn missing_deletes_tolerated(config in config_strategy()) {
        let plan = translate(&config);
        let mut store = MemoryStore::new();
        let report = PlanExecutor::new(&mut store).execute(&plan).unwrap();
        prop_assert_eq!(report.outcomes.len(), plan.len());
    }
}
