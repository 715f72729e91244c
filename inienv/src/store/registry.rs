//! Windows registry environment store.
//!
//! This module uses `unsafe` code exclusively for registry FFI calls.
//! All `unsafe` blocks are annotated with `// SAFETY:` comments.
#![allow(unsafe_code)]

use windows::core::PCWSTR;
use windows::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_SUCCESS, WIN32_ERROR};
use windows::Win32::System::Registry::{
    RegCloseKey, RegDeleteValueW, RegOpenKeyExW, RegSetValueExW, HKEY, HKEY_CURRENT_USER,
    KEY_ALL_ACCESS, REG_EXPAND_SZ,
};

use super::{EnvironmentStore, StoreError, StoreResult};

/// Subkey of `HKEY_CURRENT_USER` holding the user's persistent environment.
const ENVIRONMENT_SUBKEY: &str = "Environment";

/// Per-user environment store in `HKEY_CURRENT_USER\Environment`.
///
/// The key handle is opened by [`RegistryStore::open`] and closed when the
/// store is dropped. Values are written as `REG_EXPAND_SZ`, so references
/// such as `%USERPROFILE%` are expanded by the processes reading them.
/// Already-running processes do not observe the changes.
#[derive(Debug)]
pub struct RegistryStore {
    key: HKEY,
}

impl RegistryStore {
    /// Opens the current user's environment key for writing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Os`] if the key cannot be opened.
    pub fn open() -> StoreResult<Self> {
        let subkey = to_wide(ENVIRONMENT_SUBKEY);
        let mut key = HKEY::default();

        // SAFETY: `subkey` is NUL-terminated and outlives the call, and `key`
        // is a valid location for the returned handle.
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_CURRENT_USER,
                PCWSTR::from_raw(subkey.as_ptr()),
                0,
                KEY_ALL_ACCESS,
                &mut key,
            )
        };
        check(status)?;

        log::debug!("Opened HKEY_CURRENT_USER\\{ENVIRONMENT_SUBKEY}");
        Ok(Self { key })
    }
}

impl EnvironmentStore for RegistryStore {
    fn upsert(&mut self, name: &str, value: &str) -> StoreResult<()> {
        let wide_name = to_value_name(name)?;
        let data: Vec<u8> = to_value_data(name, value)?
            .iter()
            .flat_map(|unit| unit.to_le_bytes())
            .collect();

        // SAFETY: `self.key` is an open handle owned by this store, and
        // `wide_name` is NUL-terminated and outlives the call.
        let status = unsafe {
            RegSetValueExW(
                self.key,
                PCWSTR::from_raw(wide_name.as_ptr()),
                0,
                REG_EXPAND_SZ,
                Some(&data),
            )
        };
        check(status)
    }

    fn delete(&mut self, name: &str) -> StoreResult<()> {
        let wide_name = to_value_name(name)?;

        // SAFETY: `self.key` is an open handle owned by this store, and
        // `wide_name` is NUL-terminated and outlives the call.
        let status = unsafe { RegDeleteValueW(self.key, PCWSTR::from_raw(wide_name.as_ptr())) };
        if status == ERROR_FILE_NOT_FOUND {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        check(status)
    }
}

impl Drop for RegistryStore {
    fn drop(&mut self) {
        // SAFETY: `self.key` was opened by `RegOpenKeyExW` and is closed
        // exactly once, here.
        let status = unsafe { RegCloseKey(self.key) };
        if status != ERROR_SUCCESS {
            log::warn!("Failed to close environment key: error {}", status.0);
        }
    }
}

/// Encodes a value name, rejecting names the registry would misinterpret.
///
/// An empty name addresses the key's default value rather than a variable.
fn to_value_name(name: &str) -> StoreResult<Vec<u16>> {
    if name.is_empty() {
        return Err(StoreError::InvalidName {
            name: String::new(),
            reason: "name must not be empty".to_string(),
        });
    }
    if name.contains('\0') {
        return Err(StoreError::InvalidName {
            name: name.replace('\0', "\\0"),
            reason: "embedded NUL character".to_string(),
        });
    }
    Ok(to_wide(name))
}

/// Encodes the data of `name`; an embedded NUL would truncate the string.
fn to_value_data(name: &str, value: &str) -> StoreResult<Vec<u16>> {
    if value.contains('\0') {
        return Err(StoreError::InvalidValue {
            name: name.to_string(),
            reason: "embedded NUL character".to_string(),
        });
    }
    Ok(to_wide(value))
}

/// Encodes `s` as NUL-terminated UTF-16.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

fn check(status: WIN32_ERROR) -> StoreResult<()> {
    if status == ERROR_SUCCESS {
        return Ok(());
    }
    let message = windows::core::Error::from(status.to_hresult())
        .message()
        .to_string();
    Err(StoreError::Os {
        code: status.0,
        message,
    })
}
