//! In-memory environment store.

use std::collections::BTreeMap;

use super::{EnvironmentStore, StoreError, StoreResult};

/// An [`EnvironmentStore`] backed by a sorted map.
///
/// It follows the same contract as the registry store: deleting an absent
/// name reports [`StoreError::NotFound`], and empty names are rejected.
///
/// # Examples
///
/// ```
/// use inienv::store::{EnvironmentStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.upsert("EDITOR", "vim").unwrap();
/// assert_eq!(store.get("EDITOR"), Some("vim"));
///
/// store.delete("EDITOR").unwrap();
/// assert!(store.delete("EDITOR").unwrap_err().is_not_found());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    vars: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given variables.
    #[must_use]
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns true if `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Number of stored variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if the store holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Read-only view of all variables.
    #[must_use]
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    fn check_name(name: &str) -> StoreResult<()> {
        if name.is_empty() {
            return Err(StoreError::InvalidName {
                name: name.to_string(),
                reason: "name must not be empty".to_string(),
            });
        }
        if name.contains('\0') {
            return Err(StoreError::InvalidName {
                name: name.replace('\0', "\\0"),
                reason: "embedded NUL character".to_string(),
            });
        }
        Ok(())
    }

    // The registry stores NUL-terminated strings, so NUL cannot be kept.
    fn check_value(name: &str, value: &str) -> StoreResult<()> {
        if value.contains('\0') {
            return Err(StoreError::InvalidValue {
                name: name.to_string(),
                reason: "embedded NUL character".to_string(),
            });
        }
        Ok(())
    }
}

impl EnvironmentStore for MemoryStore {
    fn upsert(&mut self, name: &str, value: &str) -> StoreResult<()> {
        Self::check_name(name)?;
        Self::check_value(name, value)?;
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, name: &str) -> StoreResult<()> {
        Self::check_name(name)?;
        match self.vars.remove(name) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                name: name.to_string(),
            }),
        }
    }
}
