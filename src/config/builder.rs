//! Builder for configuration overrides

use std::path::PathBuf;

/// Values taken from flags and the environment, applied over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub(crate) token: Option<String>,
    pub(crate) env_token: Option<String>,
    pub(crate) endpoint: Option<String>,
    pub(crate) storage: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Create an empty set of overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Token given on the command line
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Token read from the environment
    pub fn with_env_token(mut self, token: Option<String>) -> Self {
        self.env_token = token;
        self
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_storage(mut self, storage: Option<PathBuf>) -> Self {
        self.storage = storage;
        self
    }
}
