//! End-to-end run: platform check, load, apply, report.
//!
//! A run moves through [`RunState`]s in order and stops at the first
//! failure:
//!
//! ```text
//! Start -> PlatformCheck -> Loaded -> Applied -> Reported
//!   \___________\______________\_________\__-> Failed
//! ```
//!
//! The store is opened only once the file has loaded, and it is dropped
//! (releasing any handle) before the outcome is reported.

use std::fmt;
use std::path::Path;

use crate::config::{ConfigLoader, FlatConfig};
use crate::error::{Error, Result};
use crate::operations::{translate, ApplyReport, PlanExecutor};
use crate::store::{open_user_store, EnvironmentStore, StoreResult};

/// Notice logged once all operations have been applied.
pub const COMPLETION_NOTICE: &str =
    "The logged environment variables have been added or removed on your system.";

/// Host operating system, as far as the store is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows, the only platform with a supported store.
    Windows,
    /// Any other operating system, by name.
    Other(&'static str),
}

impl Platform {
    /// Detects the platform this binary was built for.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Other(std::env::consts::OS)
        }
    }

    /// Short lowercase name of the platform.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Other(name) => name,
        }
    }

    /// Returns true if the environment store is available here.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fails unless `platform` has a supported environment store.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPlatform`] for any platform but Windows.
///
/// # Examples
///
/// ```
/// use inienv::runner::{check_platform, Platform};
///
/// assert!(check_platform(Platform::Windows).is_ok());
/// assert!(check_platform(Platform::Other("linux")).is_err());
/// ```
pub fn check_platform(platform: Platform) -> Result<()> {
    if platform.is_supported() {
        Ok(())
    } else {
        Err(Error::UnsupportedPlatform {
            os: platform.name().to_string(),
        })
    }
}

/// Progress of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing has happened yet.
    Start,
    /// The platform check passed.
    PlatformCheck,
    /// The configuration file was loaded.
    Loaded,
    /// Every operation was applied (or tolerated).
    Applied,
    /// The resolved configuration and completion notice were logged.
    Reported,
    /// A step failed; the run stopped.
    Failed,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// The resolved configuration that was applied.
    pub config: FlatConfig,
    /// Per-operation outcomes.
    pub report: ApplyReport,
}

/// Orchestrates one application of a configuration file.
///
/// # Examples
///
/// ```
/// use inienv::runner::{Platform, RunState, Runner};
/// use inienv::store::MemoryStore;
/// use std::path::Path;
///
/// let mut runner = Runner::new(Platform::Other("linux"));
/// let mut store = MemoryStore::new();
///
/// let store_ref = &mut store;
/// let result = runner.run(Path::new("vars.ini"), move || Ok(store_ref));
/// assert!(result.is_err());
/// assert_eq!(runner.state(), RunState::Failed);
/// ```
#[derive(Debug)]
pub struct Runner {
    platform: Platform,
    state: RunState,
}

impl Runner {
    /// Creates a runner that checks against the given platform.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self {
            platform,
            state: RunState::Start,
        }
    }

    /// Creates a runner for the platform this binary runs on.
    #[must_use]
    pub fn for_host() -> Self {
        Self::new(Platform::current())
    }

    /// The last state reached.
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Applies `path` to the current user's persistent environment store.
    ///
    /// # Errors
    ///
    /// See [`Runner::run`].
    pub fn run_host(&mut self, path: &Path) -> Result<RunSummary> {
        self.run(path, open_user_store)
    }

    /// Applies `path` to the store returned by `open_store`.
    ///
    /// `open_store` is only called after the platform check and the load
    /// succeeded.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedPlatform`] before anything is read
    /// - load errors from [`ConfigLoader::load`]
    /// - [`Error::StoreAccess`] if `open_store` fails
    /// - [`Error::StoreWrite`] if an operation fails
    pub fn run<S, F>(&mut self, path: &Path, open_store: F) -> Result<RunSummary>
    where
        S: EnvironmentStore,
        F: FnOnce() -> StoreResult<S>,
    {
        self.state = RunState::Start;
        let result = self.run_steps(path, open_store);
        if result.is_err() {
            self.state = RunState::Failed;
        }
        result
    }

    fn run_steps<S, F>(&mut self, path: &Path, open_store: F) -> Result<RunSummary>
    where
        S: EnvironmentStore,
        F: FnOnce() -> StoreResult<S>,
    {
        check_platform(self.platform)?;
        self.state = RunState::PlatformCheck;

        let config = ConfigLoader::load(path)?;
        self.state = RunState::Loaded;

        let plan = translate(&config);
        let report = {
            let mut store = open_store().map_err(|source| Error::StoreAccess { source })?;
            PlanExecutor::new(&mut store).execute(&plan)?
        };
        self.state = RunState::Applied;

        log::info!("{config:?}");
        log::info!("{COMPLETION_NOTICE}");
        self.state = RunState::Reported;

        Ok(RunSummary { config, report })
    }
}
