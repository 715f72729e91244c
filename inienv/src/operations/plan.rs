//! Plan types for applying a configuration to a store.
//!
//! This module translates a [`FlatConfig`] into the store operations that
//! will be performed, without performing them.

use std::fmt;

use crate::config::FlatConfig;

/// Prefix marking a configuration name for deletion.
pub const DELETE_PREFIX: char = '-';

/// A single store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOperation {
    /// Insert or overwrite a variable with an expandable string value.
    Upsert {
        /// Variable name.
        name: String,
        /// Value, verbatim.
        value: String,
    },

    /// Remove a variable.
    Delete {
        /// Variable name, with the deletion prefix stripped.
        name: String,
    },
}

impl StoreOperation {
    /// Translates one configuration entry.
    ///
    /// Exactly one leading `-` is stripped from names marked for deletion;
    /// the value of a deletion entry is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use inienv::StoreOperation;
    ///
    /// assert_eq!(
    ///     StoreOperation::from_entry("-OLD_VAR", ""),
    ///     StoreOperation::Delete { name: "OLD_VAR".to_string() }
    /// );
    /// assert_eq!(
    ///     StoreOperation::from_entry("--X", "ignored"),
    ///     StoreOperation::Delete { name: "-X".to_string() }
    /// );
    /// assert_eq!(
    ///     StoreOperation::from_entry("NEW_VAR", "x"),
    ///     StoreOperation::Upsert { name: "NEW_VAR".to_string(), value: "x".to_string() }
    /// );
    /// ```
    #[must_use]
    pub fn from_entry(name: &str, value: &str) -> Self {
        match name.strip_prefix(DELETE_PREFIX) {
            Some(target) => Self::Delete {
                name: target.to_string(),
            },
            None => Self::Upsert {
                name: name.to_string(),
                value: value.to_string(),
            },
        }
    }

    /// The variable this operation targets.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Upsert { name, .. } | Self::Delete { name } => name,
        }
    }

    /// Returns a human-readable description of this operation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Upsert { name, value } => format!("set {name} = {value}"),
            Self::Delete { name } => format!("delete {name}"),
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// The ordered operations derived from one configuration.
///
/// Plans are built by [`translate`] and run by
/// [`PlanExecutor`](super::PlanExecutor). They also carry warnings about
/// entries that will not reach the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyPlan {
    /// The sequence of operations to perform.
    pub actions: Vec<StoreOperation>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl ApplyPlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation to the plan.
    #[must_use]
    pub fn add_action(mut self, action: StoreOperation) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of operations in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

/// Translate a flat configuration into a plan.
///
/// One operation is emitted per entry, in the mapping's iteration order.
///
/// # Examples
///
/// ```
/// use inienv::{translate, FlatConfig, StoreOperation};
///
/// let mut config = FlatConfig::new();
/// config.insert("-OLD_VAR".to_string(), String::new());
/// config.insert("NEW_VAR".to_string(), "x".to_string());
///
/// let plan = translate(&config);
/// assert_eq!(
///     plan.actions,
///     vec![
///         StoreOperation::Delete { name: "OLD_VAR".to_string() },
///         StoreOperation::Upsert { name: "NEW_VAR".to_string(), value: "x".to_string() },
///     ]
/// );
/// ```
#[must_use]
pub fn translate(config: &FlatConfig) -> ApplyPlan {
    config
        .iter()
        .fold(ApplyPlan::new(), |plan, (name, value)| {
            let action = StoreOperation::from_entry(name, value);
            let plan = if action.name().is_empty() {
                plan.add_warning(format!(
                    "entry '{name}' has no variable name and will be skipped"
                ))
            } else {
                plan
            };
            plan.add_action(action)
        })
}
