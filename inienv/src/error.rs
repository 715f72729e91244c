//! Error types for the inienv library.
//!
//! This module provides the error hierarchy for loading configuration files
//! and applying them to an environment store, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreError;

/// Result type alias for operations that may fail with an inienv error.
///
/// # Examples
///
/// ```
/// use inienv::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the inienv library.
///
/// Every variant except the logging one is fatal for a run: the runner stops
/// at the first error and reports it to the caller. Missing delete targets
/// are not errors; they are recorded per operation in the apply report.
#[derive(Debug, Error)]
pub enum Error {
    /// The host operating system has no supported environment store.
    #[error("unsupported platform '{os}': this tool can only run on Windows")]
    UnsupportedPlatform {
        /// The detected operating system name.
        os: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The configuration file does not exist.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// The resolved path that was looked up.
        path: PathBuf,
    },

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file {}: {source}", path.display())]
    ConfigRead {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not well-formed INI.
    #[error("invalid INI in {} at line {line}, column {column}: {message}", path.display())]
    ConfigParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// Line of the failure, as reported by the parser.
        line: usize,
        /// Column of the failure, as reported by the parser.
        column: usize,
        /// Parser message.
        message: String,
    },

    /// The environment store could not be opened.
    #[error("cannot open environment store: {source}")]
    StoreAccess {
        /// The underlying store error.
        #[source]
        source: StoreError,
    },

    /// A store operation failed in a way that cannot be skipped.
    #[error("failed to {operation}: {source}")]
    StoreWrite {
        /// Description of the operation that failed.
        operation: String,
        /// The underlying store error.
        #[source]
        source: StoreError,
    },

    /// The logging backend could not be installed.
    #[error("logging setup failed: {reason}")]
    Logging {
        /// The reason setup failed.
        reason: String,
    },
}

impl Error {
    /// Check if error happened while loading the configuration file.
    ///
    /// # Examples
    ///
    /// ```
    /// use inienv::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ConfigNotFound { path: PathBuf::from("/missing.ini") };
    /// assert!(err.is_load_error());
    /// ```
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigRead { .. }
                | Self::ConfigParse { .. }
                | Self::InvalidPath { .. }
        )
    }

    /// Check if error came from the environment store.
    #[must_use]
    pub fn is_store_error(&self) -> bool {
        matches!(self, Self::StoreAccess { .. } | Self::StoreWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_error() {
        let err = Error::UnsupportedPlatform {
            os: "linux".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("unsupported platform"));
        assert!(display.contains("linux"));
        assert!(display.contains("Windows"));
    }

    #[test]
    fn test_config_not_found_error() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("/etc/vars.ini"),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("vars.ini"));
        assert!(err.is_load_error());
        assert!(!err.is_store_error());
    }

    #[test]
    fn test_config_parse_error() {
        let err = Error::ConfigParse {
            path: PathBuf::from("vars.ini"),
            line: 3,
            column: 7,
            message: "expecting \"]\"".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("line 3"));
        assert!(display.contains("column 7"));
        assert!(err.is_load_error());
    }

    #[test]
    fn test_store_write_error() {
        let err = Error::StoreWrite {
            operation: "set FOO".to_string(),
            source: StoreError::Os {
                code: 5,
                message: "Access is denied.".to_string(),
            },
        };
        let display = format!("{err}");
        assert!(display.contains("failed to set FOO"));
        assert!(display.contains("Access is denied"));
        assert!(err.is_store_error());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<()> {
            Err(Error::Logging {
                reason: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
