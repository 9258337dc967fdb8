//! Key/value storage for user preferences.
//!
//! Preferences live in `localStorage`. Tests swap in a thread-local map
//! that survives for the lifetime of the thread, mirroring how
//! `localStorage` survives component lifetimes.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached (private mode, no window, ...).
    Unavailable,
    /// The store refused the write (quota, security policy).
    WriteRejected(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "Preference storage is unavailable"),
            StoreError::WriteRejected(reason) => write!(f, "Preference write rejected: {}", reason),
        }
    }
}

impl std::error::Error for StoreError {}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
thread_local! {
    /// Backing map for [`MemoryStore`]. Thread-local: there is only ever one
    /// thread in the browser and tests each run on their own.
    static MEMORY_STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// Thread-local in-memory store for tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore;

#[cfg(test)]
impl MemoryStore {
    pub fn clear() {
        MEMORY_STORE.with(|m| m.borrow_mut().clear());
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        MEMORY_STORE.with(|m| m.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        MEMORY_STORE.with(|m| {
            m.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }
}

/// Browser `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::WriteRejected(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        MemoryStore::clear();
        let store = MemoryStore;
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_store_error_messages() {
        assert_eq!(StoreError::Unavailable.to_string(), "Preference storage is unavailable");
        assert_eq!(
            StoreError::WriteRejected("quota".into()).to_string(),
            "Preference write rejected: quota"
        );
    }
}
