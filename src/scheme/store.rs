//! Cursor scheme persistence
//!
//! The active Windows cursor scheme is one REG_SZ value per role under
//! `HKCU\Control Panel\Cursors`. An empty value means the system default
//! appearance for that role. The store is write-only and non-transactional:
//! each role's write stands alone, and a failed write must stay
//! distinguishable from a successful clear so callers can count accurately.

use std::collections::BTreeMap;

use thiserror::Error;

use super::catalog::CursorRole;

/// A single role's persistence write failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open the cursor scheme key (error code {0})")]
    Open(u32),
    #[error("failed to write cursor value {role} (error code {code})")]
    Write { role: &'static str, code: u32 },
}

/// Persisted role → value store for the active cursor scheme.
pub trait SchemeStore {
    /// Bind `role` to a cursor file path, or to the system default when
    /// `value` is empty.
    fn set(&mut self, role: CursorRole, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. Backs `--dry-run` (same code path as a live apply, no
/// registry writes) and the test suite.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<CursorRole, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value last written for `role`, if any write happened.
    pub fn get(&self, role: CursorRole) -> Option<&str> {
        self.values.get(&role).map(String::as_str)
    }

    /// Number of roles written so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SchemeStore for MemoryStore {
    fn set(&mut self, role: CursorRole, value: &str) -> Result<(), StoreError> {
        self.values.insert(role, value.to_string());
        Ok(())
    }
}

#[cfg(windows)]
mod registry {
    use windows::core::{w, PCWSTR};
    use windows::Win32::Foundation::ERROR_SUCCESS;
    use windows::Win32::System::Registry::{
        RegCloseKey, RegOpenKeyExW, RegSetValueExW, HKEY, HKEY_CURRENT_USER, KEY_SET_VALUE,
        REG_SZ,
    };

    use super::{CursorRole, SchemeStore, StoreError};

    /// Store backed by `HKCU\Control Panel\Cursors`.
    #[derive(Debug, Default)]
    pub struct CursorRegistry;

    impl CursorRegistry {
        pub fn new() -> Self {
            Self
        }
    }

    impl SchemeStore for CursorRegistry {
        fn set(&mut self, role: CursorRole, value: &str) -> Result<(), StoreError> {
            let mut key = HKEY::default();
            let status = unsafe {
                RegOpenKeyExW(
                    HKEY_CURRENT_USER,
                    w!("Control Panel\\Cursors"),
                    0,
                    KEY_SET_VALUE,
                    &mut key,
                )
            };
            if status != ERROR_SUCCESS {
                return Err(StoreError::Open(status.0));
            }

            let name: Vec<u16> = role
                .registry_value()
                .encode_utf16()
                .chain(std::iter::once(0))
                .collect();
            let data: Vec<u16> = value.encode_utf16().chain(std::iter::once(0)).collect();
            // REG_SZ data is the raw UTF-16 bytes including the terminator.
            let bytes = unsafe {
                std::slice::from_raw_parts(data.as_ptr().cast::<u8>(), data.len() * 2)
            };

            let status = unsafe {
                RegSetValueExW(key, PCWSTR(name.as_ptr()), 0, REG_SZ, Some(bytes))
            };
            let _ = unsafe { RegCloseKey(key) };

            if status != ERROR_SUCCESS {
                return Err(StoreError::Write {
                    role: role.registry_value(),
                    code: status.0,
                });
            }
            Ok(())
        }
    }
}

#[cfg(windows)]
pub use registry::CursorRegistry;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_records_writes() {
        let mut store = MemoryStore::new();
        store
            .set(CursorRole::Arrow, r"C:\cursors\Normal.cur")
            .unwrap();
        store.set(CursorRole::Wait, "").unwrap();

        assert_eq!(store.get(CursorRole::Arrow), Some(r"C:\cursors\Normal.cur"));
        assert_eq!(store.get(CursorRole::Wait), Some(""));
        assert_eq!(store.get(CursorRole::Hand), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_memory_store_last_write_wins() {
        let mut store = MemoryStore::new();
        store.set(CursorRole::Arrow, "first.cur").unwrap();
        store.set(CursorRole::Arrow, "").unwrap();

        assert_eq!(store.get(CursorRole::Arrow), Some(""));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_error_messages_name_the_role() {
        let err = StoreError::Write {
            role: "Arrow",
            code: 5,
        };
        assert!(err.to_string().contains("Arrow"));
        assert!(err.to_string().contains('5'));
    }
}
