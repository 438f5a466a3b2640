//! Base types and traits for the command pattern

use crate::config::Config;
use crate::storage::{FileStore, SearchHistory};
use anyhow::Result;

/// Context passed to all commands containing the resolved configuration
#[derive(Clone)]
pub struct CommandContext {
    /// The loaded configuration with overrides applied
    pub config: Config,
}

impl CommandContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Search history backed by the configured store file
    pub fn history(&self) -> SearchHistory<FileStore> {
        SearchHistory::new(FileStore::new(self.config.storage_path()))
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
