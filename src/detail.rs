//! Repository page
//!
//! Fetched fresh on every visit and never stored.

use crate::constants::{github::ISSUE_LIMIT, messages};
use crate::router::Route;
use crate::state::QueryState;
use anyhow::{Result, bail};
use explorer_github::{IssueNode, RepositoryApi, RepositoryDetail};
use tracing::{debug, warn};

/// Issues shown on the page, in server order, at most [`ISSUE_LIMIT`]
pub fn visible_issues(detail: &RepositoryDetail) -> &[IssueNode] {
    let nodes = &detail.issues.nodes;
    &nodes[..nodes.len().min(ISSUE_LIMIT)]
}

pub struct RepositoryView {
    owner: String,
    name: Option<String>,
    state: QueryState<RepositoryDetail>,
}

impl RepositoryView {
    pub fn new(owner: impl Into<String>, name: Option<String>) -> Self {
        Self {
            owner: owner.into(),
            name,
            state: QueryState::Idle,
        }
    }

    /// Build the view for a `/repository/<owner>/<name>` path
    pub fn from_route(path: &str) -> Result<Self> {
        match Route::parse(path)? {
            Route::Repository { owner, name } => Ok(Self::new(owner, name)),
            Route::Dashboard => bail!("'{}' is not a repository page", path),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn state(&self) -> &QueryState<RepositoryDetail> {
        &self.state
    }

    /// Issues to display once loaded
    pub fn issues(&self) -> &[IssueNode] {
        self.state.data().map(visible_issues).unwrap_or_default()
    }

    /// Fetch the repository and settle into `Success` or `Error`
    pub async fn load<A>(&mut self, api: &A) -> &QueryState<RepositoryDetail>
    where
        A: RepositoryApi + ?Sized,
    {
        self.state = QueryState::Loading;
        debug!(owner = %self.owner, name = ?self.name, "loading repository page");

        self.state = match api
            .repository_with_issues(&self.owner, self.name.as_deref())
            .await
        {
            Ok(Some(detail)) => QueryState::Success(detail),
            Ok(None) => {
                warn!(owner = %self.owner, name = ?self.name, "repository not found");
                QueryState::Error(messages::DETAIL_ERROR.to_string())
            }
            Err(err) => {
                warn!(
                    owner = %self.owner,
                    name = ?self.name,
                    error = %err,
                    "repository query failed"
                );
                QueryState::Error(messages::DETAIL_ERROR.to_string())
            }
        };

        &self.state
    }
}
