//! Logging backend for the inienv library and CLI.
//!
//! Library code logs through the `log` facade. This module provides the
//! [`Logger`] behind it: human-readable lines on stderr, filtered by
//! [`LogLevel`], plus an optional rolling log file that keeps every record
//! down to debug level.

use std::env;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::error::{Error, Result};

/// Environment variable selecting the stderr verbosity.
pub const LOG_MODE_VAR: &str = "INIENV_LOG_MODE";

/// Environment variable selecting the log file directory.
pub const LOG_DIR_VAR: &str = "INIENV_LOG_DIR";

/// Log directory used when [`LOG_DIR_VAR`] is unset.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Prefix of rolling log file names.
const LOG_FILE_PREFIX: &str = "inienv";

/// Number of rotated log files kept on disk.
const MAX_LOG_FILES: usize = 10;

/// Logging level for controlling stderr verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use inienv::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Errors only.
    Quiet,
    /// Errors, warnings and the run summary.
    #[default]
    Normal,
    /// Everything, including per-operation debug output.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use inienv::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level shown on stderr.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Error,
            Self::Normal => LevelFilter::Info,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Stderr verbosity.
    pub level: LogLevel,
    /// Directory for rolling log files, or `None` to log to stderr only.
    pub log_dir: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Normal,
            log_dir: Some(PathBuf::from(DEFAULT_LOG_DIR)),
        }
    }
}

impl LogSettings {
    /// Reads [`LOG_MODE_VAR`] and [`LOG_DIR_VAR`].
    ///
    /// An unrecognized mode falls back to [`LogLevel::Normal`]. An empty
    /// directory disables file logging; an unset one means
    /// [`DEFAULT_LOG_DIR`].
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var(LOG_MODE_VAR)
            .ok()
            .and_then(|value| LogLevel::parse(&value).ok())
            .unwrap_or_default();

        let log_dir = match env::var_os(LOG_DIR_VAR) {
            Some(dir) if dir.is_empty() => None,
            Some(dir) => Some(PathBuf::from(dir)),
            None => Some(PathBuf::from(DEFAULT_LOG_DIR)),
        };

        Self { level, log_dir }
    }
}

/// A `log` backend writing to stderr and, optionally, a rolling file.
///
/// # Examples
///
/// ```
/// use inienv::{LogLevel, Logger};
/// use log::Log;
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert_eq!(logger.level(), LogLevel::Normal);
/// assert!(logger.enabled(&log::Metadata::builder().level(log::Level::Info).build()));
/// assert!(!logger.enabled(&log::Metadata::builder().level(log::Level::Debug).build()));
/// ```
pub struct Logger {
    level: LogLevel,
    file: Option<Mutex<RollingFileAppender>>,
}

impl Logger {
    /// Creates a stderr-only logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level, file: None }
    }

    /// Adds a daily-rotated log file in `dir`, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Logging`] if the directory or file cannot be created.
    pub fn with_log_dir(mut self, dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| Error::Logging {
            reason: format!("cannot create log directory {}: {e}", dir.display()),
        })?;

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix("log")
            .max_log_files(MAX_LOG_FILES)
            .build(dir)
            .map_err(|e| Error::Logging {
                reason: format!("cannot open log file in {}: {e}", dir.display()),
            })?;

        self.file = Some(Mutex::new(appender));
        Ok(self)
    }

    /// Returns the current stderr log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// The most verbose level any sink accepts.
    #[must_use]
    pub fn max_level(&self) -> LevelFilter {
        if self.file.is_some() {
            LevelFilter::Debug
        } else {
            self.level.filter()
        }
    }

    fn file_line(record: &Record<'_>) -> String {
        format!(
            "{} {:<5} {}: {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if record.level() <= self.level.filter() {
            eprintln!("{}: {}", record.level(), record.args());
        }

        if let Some(file) = &self.file {
            if let Ok(mut writer) = file.lock() {
                // A failing log file must not fail the run.
                let _ = writer.write_all(Self::file_line(record).as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut writer) = file.lock() {
                let _ = writer.flush();
            }
        }
    }
}

/// Installs the global logger described by `settings`.
///
/// # Errors
///
/// Returns [`Error::Logging`] if the log directory cannot be used or a
/// logger is already installed.
///
/// # Examples
///
/// ```
/// use inienv::{init_logger, LogLevel, LogSettings};
///
/// let settings = LogSettings { level: LogLevel::Quiet, log_dir: None };
/// init_logger(&settings).unwrap();
/// ```
pub fn init_logger(settings: &LogSettings) -> Result<()> {
    let mut logger = Logger::new(settings.level);
    if let Some(dir) = &settings.log_dir {
        logger = logger.with_log_dir(dir)?;
    }

    let max_level = logger.max_level();
    log::set_boxed_logger(Box::new(logger)).map_err(|e| Error::Logging {
        reason: e.to_string(),
    })?;
    log::set_max_level(max_level);
    Ok(())
}
