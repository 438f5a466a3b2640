//! Searched repositories kept in the local store

use super::KeyValueStore;
use crate::constants;
use crate::error::PersistenceError;
use tracing::{debug, warn};

/// A repository found by a successful lookup
pub type SearchEntry = explorer_github::RepositorySummary;

/// Loads and saves the search list under a fixed key
pub struct SearchHistory<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SearchHistory<S> {
    /// Use the default repositories key
    pub fn new(store: S) -> Self {
        Self::with_key(store, constants::storage::REPOSITORIES_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the stored list
    ///
    /// A missing key, an unreadable store, or a value that is not a JSON
    /// list of entries all yield an empty list.
    pub fn load(&self) -> Vec<SearchEntry> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "store unavailable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<SearchEntry>>(&raw) {
            Ok(entries) => {
                debug!(key = %self.key, count = entries.len(), "loaded search history");
                entries
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "stored history is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Replace the stored list with `entries`
    pub fn save(&self, entries: &[SearchEntry]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set_item(&self.key, &raw)?;
        debug!(key = %self.key, count = entries.len(), "saved search history");
        Ok(())
    }
}
