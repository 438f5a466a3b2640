//! Error types for the explorer views and the local store

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the local key-value store
///
/// These never reach the user; the store adapter logs them and carries on
/// with an empty list.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by the views
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Input rejected before any query was issued
    #[error("{0}")]
    Validation(String),

    /// Query failed or the repository does not exist
    #[error("{0}")]
    Query(String),
}
