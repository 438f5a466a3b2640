//! Explorer - look up GitHub repositories and keep a list of past searches

pub mod commands;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod detail;
pub mod error;
pub mod render;
pub mod router;
pub mod state;
pub mod storage;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Config, ConfigOverrides};
pub use dashboard::{Dashboard, DashboardPhase, Resolution, SearchTicket};
pub use detail::RepositoryView;
pub use error::{ExplorerError, PersistenceError};
pub use router::Route;
pub use state::QueryState;
pub use storage::{FileStore, KeyValueStore, MemoryStore, SearchEntry, SearchHistory};
