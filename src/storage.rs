//! Persistent key-value storage for the account snapshot.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::AccountError;

pub trait AccountStore {
    fn get(&self, key: &str) -> Result<Option<String>, AccountError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AccountError>;
}

/// `window.localStorage`.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, AccountError> {
        let window = web_sys::window().ok_or(AccountError::StorageUnavailable)?;
        window
            .local_storage()?
            .ok_or(AccountError::StorageUnavailable)
    }
}

impl AccountStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AccountError> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AccountError> {
        Self::storage()?.set_item(key, value)?;
        Ok(())
    }
}

/// In-process store, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl AccountStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AccountError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AccountError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
