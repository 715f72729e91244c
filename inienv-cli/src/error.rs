//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use inienv::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 2: Unsupported platform
    /// - 3: Configuration file missing, unreadable or malformed
    /// - 4: Environment store could not be opened
    /// - 5: Environment store rejected an operation
    /// - 6: Logging could not be set up
    pub fn exit_code(&self) -> i32 {
        let CliError::Library(lib_err) = self;
        match lib_err {
            LibError::UnsupportedPlatform { .. } => 2,
            LibError::InvalidPath { .. }
            | LibError::ConfigNotFound { .. }
            | LibError::ConfigRead { .. }
            | LibError::ConfigParse { .. } => 3,
            LibError::StoreAccess { .. } => 4,
            LibError::StoreWrite { .. } => 5,
            LibError::Logging { .. } => 6,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}
