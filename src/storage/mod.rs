//! Local key-value storage
//!
//! A [`KeyValueStore`] offers the `getItem`/`setItem` surface of browser
//! local storage: string keys mapping to string values. [`SearchHistory`]
//! keeps the searched repositories under one fixed key on top of it.

pub mod file;
pub mod history;
pub mod memory;

pub use file::FileStore;
pub use history::{SearchEntry, SearchHistory};
pub use memory::MemoryStore;

use crate::error::PersistenceError;

/// String key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove `key` if present
    fn remove_item(&self, key: &str) -> Result<(), PersistenceError>;

    /// Remove every key
    fn clear(&self) -> Result<(), PersistenceError>;
}
