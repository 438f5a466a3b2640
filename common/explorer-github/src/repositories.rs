//! Repository-related operations

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::queries::{REPOSITORY, REPOSITORY_WITH_ISSUES, RepositoryData, RepositoryVars};
use crate::types::{RepositoryDetail, RepositorySummary};
use async_trait::async_trait;
use tracing::debug;

/// Repository queries consumed by the views
///
/// `Ok(None)` means the API answered but reported no repository.
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// Fetch the summary fields shown in the search list
    async fn lookup_repository(
        &self,
        owner: &str,
        name: Option<&str>,
    ) -> Result<Option<RepositorySummary>, GitHubError>;

    /// Fetch counters and the last five issues
    async fn repository_with_issues(
        &self,
        owner: &str,
        name: Option<&str>,
    ) -> Result<Option<RepositoryDetail>, GitHubError>;
}

#[async_trait]
impl RepositoryApi for GitHubClient {
    async fn lookup_repository(
        &self,
        owner: &str,
        name: Option<&str>,
    ) -> Result<Option<RepositorySummary>, GitHubError> {
        debug!(owner, ?name, "looking up repository");
        let vars = RepositoryVars::new(owner, name);
        let data: RepositoryData<RepositorySummary> = self.query(REPOSITORY, &vars).await?;
        Ok(data.repository)
    }

    async fn repository_with_issues(
        &self,
        owner: &str,
        name: Option<&str>,
    ) -> Result<Option<RepositoryDetail>, GitHubError> {
        debug!(owner, ?name, "fetching repository with issues");
        let vars = RepositoryVars::new(owner, name);
        let data: RepositoryData<RepositoryDetail> =
            self.query(REPOSITORY_WITH_ISSUES, &vars).await?;
        Ok(data.repository)
    }
}
