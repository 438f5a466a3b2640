//! In-memory key-value store

use super::KeyValueStore;
use crate::error::PersistenceError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Key-value store held in memory
///
/// Clones share the same items, so a test can keep a handle while a
/// [`SearchHistory`](super::SearchHistory) owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.items().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistenceError> {
        self.items().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        self.items().clear();
        Ok(())
    }
}
