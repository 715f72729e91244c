//! Resolution of the configuration file argument to an absolute path.
//!
//! The path is made absolute without touching the filesystem:
//! - a leading `~` is replaced by the home directory
//! - relative paths are joined onto the current directory
//! - `.` and `..` components are collapsed lexically (symlinks are not
//!   followed)

use std::env;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Replace a leading `~` component with the user's home directory.
///
/// Only a bare `~` is expanded. A component such as `~alice` is an
/// ordinary relative name and is returned unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path starts with `~` and the home
/// directory is unknown.
///
/// # Examples
///
/// ```
/// use inienv::path::expand_home;
/// use std::path::Path;
///
/// let expanded = expand_home(Path::new("~/vars.ini")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("vars.ini"));
///
/// let untouched = expand_home(Path::new("~alice/vars.ini")).unwrap();
/// assert_eq!(untouched, Path::new("~alice/vars.ini"));
/// ```
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    if components.next() != Some(Component::Normal(OsStr::new("~"))) {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    Ok(home.join(components.as_path()))
}

/// Collapse `.` and `..` components of an absolute path.
///
/// `..` at the root stays at the root.
///
/// # Examples
///
/// ```
/// use inienv::path::collapse_dots;
/// use std::path::{Path, PathBuf};
///
/// let collapsed = collapse_dots(Path::new("/etc/./inienv/../vars.ini"));
/// assert_eq!(collapsed, PathBuf::from("/etc/vars.ini"));
/// ```
#[must_use]
pub fn collapse_dots(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => result.push(component.as_os_str()),
            Component::CurDir => {}
            Component::Normal(part) => {
                result.push(part);
                depth += 1;
            }
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                }
            }
        }
    }

    result
}

/// Resolve a user-supplied path to an absolute path.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path is empty, home expansion
/// fails, or the current directory is unavailable.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path is empty".to_string(),
        });
    }

    let expanded = expand_home(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    Ok(collapse_dots(&absolute))
}
