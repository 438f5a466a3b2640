//! Configuration file loading and resolution

use super::ConfigOverrides;
use super::validation;
use crate::constants;
use anyhow::{Context, Result};
use explorer_github::GitHubClient;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

fn default_endpoint() -> String {
    constants::github::API_ENDPOINT.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub storage: Option<PathBuf>,
}

impl Config {
    /// Create a configuration with default values and no token
    pub fn new() -> Self {
        Self {
            token: None,
            endpoint: default_endpoint(),
            storage: None,
        }
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {path}"))?;

        config.validate()?;
        debug!(path, "loaded configuration");
        Ok(config)
    }

    /// Load the given file, or the default file when present
    ///
    /// An explicitly named file must exist. The default file is optional.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(constants::config::DEFAULT_CONFIG_FILE).exists() => {
                Self::load(constants::config::DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::new()),
        }
    }

    /// Apply command-line and environment overrides
    ///
    /// Token precedence is flag, then environment, then file.
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        self.token = overrides.token.or(overrides.env_token).or(self.token);
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(storage) = overrides.storage {
            self.storage = Some(storage);
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        validation::validate_endpoint(&self.endpoint)?;
        if let Some(token) = &self.token {
            validation::validate_token(token)?;
        }
        Ok(())
    }

    /// Token for authenticated requests
    pub fn token(&self) -> Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "GitHub token not provided. Use --token flag or set {} environment variable.",
                constants::github::TOKEN_ENV
            )
        })
    }

    /// Path of the local store file
    ///
    /// Defaults to `~/.github-explorer/local-storage.json`, or the current
    /// directory when no home directory is known.
    pub fn storage_path(&self) -> PathBuf {
        if let Some(path) = &self.storage {
            return path.clone();
        }

        let base = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(constants::storage::DEFAULT_STORAGE_DIR)
            .join(constants::storage::DEFAULT_STORAGE_FILE)
    }

    /// Build the GraphQL client from this configuration
    pub fn client(&self) -> Result<GitHubClient> {
        let token = self.token()?;
        Ok(GitHubClient::new(self.endpoint.clone(), token))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
