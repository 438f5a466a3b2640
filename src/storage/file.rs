//! File-backed key-value store

use super::KeyValueStore;
use crate::error::PersistenceError;
use crate::utils::ensure_parent_exists;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

type Items = BTreeMap<String, String>;

/// Key-value store kept as one JSON object in a file
///
/// Every write rewrites the whole object. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_items(&self) -> Result<Items, PersistenceError> {
        if !self.path.exists() {
            return Ok(Items::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(Items::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Read the current items, starting over if the file is corrupt
    fn read_items_for_update(&self) -> Items {
        self.read_items().unwrap_or_else(|err| {
            warn!(path = %self.path.display(), error = %err, "discarding unreadable store file");
            Items::new()
        })
    }

    fn write_items(&self, items: &Items) -> Result<(), PersistenceError> {
        ensure_parent_exists(&self.path).map_err(|e| self.io_error(e))?;
        let content = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), keys = items.len(), "store written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let mut items = self.read_items()?;
        Ok(items.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut items = self.read_items_for_update();
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistenceError> {
        let mut items = self.read_items_for_update();
        if items.remove(key).is_some() {
            self.write_items(&items)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        self.write_items(&Items::new())
    }
}
