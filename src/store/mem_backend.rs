use super::backend::StorageBackend;
use crate::error::{RecircleError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded
/// (one logical writer per user action). This avoids the overhead of
/// `RwLock` while still allowing the `StorageBackend` trait to use `&self`
/// for all methods.
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant a raw payload directly, bypassing the store.
    /// Used to simulate data written by older app builds (or corrupted data).
    pub fn plant_raw(&self, key: &str, payload: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.borrow();
        Ok(slots.get(key).cloned())
    }

    fn write_raw(&self, key: &str, payload: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RecircleError::Store("Simulated write error".to_string()));
        }
        let mut slots = self.slots.borrow_mut();
        slots.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.borrow_mut();
        slots.remove(key);
        Ok(())
    }
}
