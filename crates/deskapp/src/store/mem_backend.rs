use super::backend::{StateBackend, StorageScope};
use crate::error::{DeskError, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// In-memory storage backend for tests and throwaway sessions.
///
/// Uses `RefCell` for interior mutability since deskapp is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<BTreeMap<(StorageScope, String), String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StateBackend for MemBackend {
    fn read(&self, scope: StorageScope, key: &str) -> Result<Option<String>> {
        let values = self.values.borrow();
        Ok(values.get(&(scope, key.to_string())).cloned())
    }

    fn write(&self, scope: StorageScope, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DeskError::Store("Simulated write error".to_string()));
        }
        let mut values = self.values.borrow_mut();
        values.insert((scope, key.to_string()), value.to_string());
        Ok(())
    }

    fn remove(&self, scope: StorageScope, key: &str) -> Result<()> {
        let mut values = self.values.borrow_mut();
        values.remove(&(scope, key.to_string()));
        Ok(())
    }

    fn keys(&self, scope: StorageScope) -> Result<Vec<String>> {
        let values = self.values.borrow();
        Ok(values
            .keys()
            .filter(|(s, _)| *s == scope)
            .map(|(_, key)| key.clone())
            .collect())
    }
}
