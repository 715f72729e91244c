//! Persistent environment variable stores.
//!
//! The apply step talks to the store only through the [`EnvironmentStore`]
//! capability. Two implementations exist:
//!
//! - [`RegistryStore`]: the per-user environment of the Windows registry
//!   (`HKEY_CURRENT_USER\Environment`), only compiled on Windows.
//! - [`MemoryStore`]: an in-memory map with the same contract.
//!
//! Each call is committed independently; there is no transaction spanning
//! several operations.

pub mod memory;
#[cfg(windows)]
pub mod registry;

pub use memory::MemoryStore;
#[cfg(windows)]
pub use registry::RegistryStore;

use thiserror::Error;

/// Result type for single store calls.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failure of a single store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The named variable does not exist in the store.
    #[error("environment variable '{name}' not found")]
    NotFound {
        /// The variable name.
        name: String,
    },

    /// The name cannot be used as a variable name.
    #[error("invalid variable name '{name}': {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The value cannot be stored for the named variable.
    #[error("invalid value for '{name}': {reason}")]
    InvalidValue {
        /// The variable the value was meant for.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// This platform has no persistent per-user environment store.
    #[error("no persistent environment store on '{os}'")]
    Unsupported {
        /// The detected operating system name.
        os: String,
    },

    /// The operating system reported a failure.
    #[error("OS error {code}: {message}")]
    Os {
        /// Platform error code.
        code: u32,
        /// Platform error message.
        message: String,
    },
}

impl StoreError {
    /// Returns true if the error reports an absent variable.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Opens the current user's persistent environment store.
///
/// # Errors
///
/// Returns [`StoreError::Os`] if the registry key cannot be opened.
#[cfg(windows)]
pub fn open_user_store() -> StoreResult<Box<dyn EnvironmentStore>> {
    Ok(Box::new(RegistryStore::open()?))
}

/// Opens the current user's persistent environment store.
///
/// # Errors
///
/// Always returns [`StoreError::Unsupported`]: only Windows has one.
#[cfg(not(windows))]
pub fn open_user_store() -> StoreResult<Box<dyn EnvironmentStore>> {
    Err(StoreError::Unsupported {
        os: std::env::consts::OS.to_string(),
    })
}

/// Write capability over a persistent, keyed environment variable store.
///
/// Implementations release any underlying handle when dropped.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentStore {
    /// Inserts or overwrites `name` with an expandable string `value`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store rejects the write.
    fn upsert(&mut self, name: &str, value: &str) -> StoreResult<()>;

    /// Removes `name` from the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `name` is absent, or another
    /// [`StoreError`] if the store rejects the deletion.
    fn delete(&mut self, name: &str) -> StoreResult<()>;
}

impl<S: EnvironmentStore + ?Sized> EnvironmentStore for &mut S {
    fn upsert(&mut self, name: &str, value: &str) -> StoreResult<()> {
        (**self).upsert(name, value)
    }

    fn delete(&mut self, name: &str) -> StoreResult<()> {
        (**self).delete(name)
    }
}

impl<S: EnvironmentStore + ?Sized> EnvironmentStore for Box<S> {
    fn upsert(&mut self, name: &str, value: &str) -> StoreResult<()> {
        (**self).upsert(name, value)
    }

    fn delete(&mut self, name: &str) -> StoreResult<()> {
        (**self).delete(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound {
            name: "OLD_VAR".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(format!("{err}"), "environment variable 'OLD_VAR' not found");
    }

    #[test]
    fn test_os_error_is_not_not_found() {
        let err = StoreError::Os {
            code: 5,
            message: "Access is denied.".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(format!("{err}").contains("OS error 5"));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_open_user_store_unsupported() {
        assert!(matches!(
            open_user_store(),
            Err(StoreError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_mut_ref_forwards_to_store() {
        fn set_foo<S: EnvironmentStore>(mut store: S) -> StoreResult<()> {
            store.upsert("FOO", "1")
        }

        let mut store = MemoryStore::new();
        set_foo(&mut store).unwrap();
        assert_eq!(store.get("FOO"), Some("1"));
    }
}
