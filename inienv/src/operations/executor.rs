//! Plan execution engine.
//!
//! This module implements the executor that takes an [`ApplyPlan`] and
//! applies it to an [`EnvironmentStore`].

use crate::error::{Error, Result};
use crate::store::{EnvironmentStore, StoreError};

use super::plan::{ApplyPlan, StoreOperation};

/// What happened to a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// The store accepted the operation.
    Applied,

    /// A delete targeted a variable that does not exist.
    MissingTarget,

    /// The operation was not sent to the store.
    Skipped {
        /// Why the operation was skipped.
        reason: String,
    },
}

/// Result of executing a plan.
///
/// Holds one outcome per operation that ran, in plan order. Fatal failures
/// are returned as errors instead, so a report always describes a run that
/// reached the end of its plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Operations paired with their outcomes, in execution order.
    pub outcomes: Vec<(StoreOperation, OperationOutcome)>,
}

impl ApplyReport {
    fn record(&mut self, operation: &StoreOperation, outcome: OperationOutcome) {
        self.outcomes.push((operation.clone(), outcome));
    }

    fn count(&self, pred: impl Fn(&OperationOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }

    /// Number of operations the store accepted.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.count(|o| matches!(o, OperationOutcome::Applied))
    }

    /// Number of deletes whose target did not exist.
    #[must_use]
    pub fn missing(&self) -> usize {
        self.count(|o| matches!(o, OperationOutcome::MissingTarget))
    }

    /// Number of operations that never reached the store.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, OperationOutcome::Skipped { .. }))
    }

    /// Returns true if every operation was applied.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.applied() == self.outcomes.len()
    }
}

/// Executes apply plans against an environment store.
///
/// # Examples
///
/// ```
/// use inienv::operations::{ApplyPlan, PlanExecutor, StoreOperation};
/// use inienv::store::MemoryStore;
///
/// let mut store = MemoryStore::with_vars([("OLD_VAR", "1")]);
/// let plan = ApplyPlan::new()
///     .add_action(StoreOperation::from_entry("-OLD_VAR", ""))
///     .add_action(StoreOperation::from_entry("-NEVER_SET", ""))
///     .add_action(StoreOperation::from_entry("NEW_VAR", "x"));
///
/// let report = PlanExecutor::new(&mut store).execute(&plan).unwrap();
/// assert_eq!(report.applied(), 2);
/// assert_eq!(report.missing(), 1);
/// assert_eq!(store.get("NEW_VAR"), Some("x"));
/// assert!(!store.contains("OLD_VAR"));
/// ```
pub struct PlanExecutor<'a, S: EnvironmentStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: EnvironmentStore + ?Sized> PlanExecutor<'a, S> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Executes the given plan.
    ///
    /// Operations run in plan order and each is committed on its own. A
    /// delete of an absent variable is logged and recorded as
    /// [`OperationOutcome::MissingTarget`]; an operation with an empty
    /// name is recorded as [`OperationOutcome::Skipped`]. Both let the run
    /// continue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreWrite`] on any other store failure. Operations
    /// before the failing one stay applied; later ones are not attempted.
    pub fn execute(&mut self, plan: &ApplyPlan) -> Result<ApplyReport> {
        for warning in &plan.warnings {
            log::warn!("{warning}");
        }

        let mut report = ApplyReport::default();
        for action in &plan.actions {
            let outcome = self.execute_action(action)?;
            report.record(action, outcome);
        }

        log::debug!(
            "Applied {} operation(s), {} missing, {} skipped",
            report.applied(),
            report.missing(),
            report.skipped()
        );
        Ok(report)
    }

    fn execute_action(&mut self, action: &StoreOperation) -> Result<OperationOutcome> {
        if action.name().is_empty() {
            log::warn!("Skipping '{action}': empty variable name");
            return Ok(OperationOutcome::Skipped {
                reason: "empty variable name".to_string(),
            });
        }

        let result = match action {
            StoreOperation::Upsert { name, value } => self.store.upsert(name, value),
            StoreOperation::Delete { name } => self.store.delete(name),
        };

        match result {
            Ok(()) => {
                log::debug!("{action}");
                Ok(OperationOutcome::Applied)
            }
            Err(StoreError::NotFound { name }) if matches!(action, StoreOperation::Delete { .. }) => {
                log::error!("Could not delete environment variable: {name} it was not found.");
                Ok(OperationOutcome::MissingTarget)
            }
            Err(source) => Err(Error::StoreWrite {
                operation: action.description(),
                source,
            }),
        }
    }
}
