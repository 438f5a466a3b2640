//! Error type for GraphQL operations

use thiserror::Error;

/// Failure of a single GraphQL request
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The request could not be sent or the body could not be read
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status
    #[error("GitHub API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response carried a GraphQL `errors` array
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The response had neither errors nor a `data` field
    #[error("GraphQL response contained no data")]
    MissingData,

    /// The response body was not the expected JSON shape
    #[error("Failed to parse GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GitHubError {
    /// Whether the failure is an authentication problem (401/403)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GitHubError::Status { status: 401 | 403, .. })
    }
}
