//! GitHub GraphQL client library
//!
//! This library provides the GraphQL transport and the typed repository
//! queries used by the explorer.
//!
//! ## Modules
//!
//! - [`client`]: Core GraphQL client with endpoint and bearer token
//! - [`error`]: Error type for transport and GraphQL failures
//! - [`queries`]: Query documents and their variables
//! - [`repositories`]: The [`RepositoryApi`] trait and its client implementation
//! - [`types`]: Response payload types
//! - [`util`]: Utility functions for `owner/name` handling

mod client;
mod error;
mod queries;
mod repositories;
mod types;
mod util;

// Re-export public API
pub use client::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, GitHubClient};
pub use error::GitHubError;
pub use queries::{REPOSITORY, REPOSITORY_WITH_ISSUES, RepositoryVars};
pub use repositories::RepositoryApi;
pub use types::{
    Actor, IssueConnection, IssueNode, Owner, RepositoryDetail, RepositorySummary, TotalCount,
};
pub use util::split_name_with_owner;
