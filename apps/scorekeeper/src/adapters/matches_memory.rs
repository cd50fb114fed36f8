//! In-process `MatchStore`, for tests and throwaway sessions.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::AppError;
use crate::repos::matches::MatchStore;

#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, payload: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.lock().insert(key.into(), payload.into());
        store
    }

    /// Raw payload under `key`, bypassing the trait.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }
}

impl MatchStore for InMemoryMatchStore {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), AppError> {
        self.entries
            .lock()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AppError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
