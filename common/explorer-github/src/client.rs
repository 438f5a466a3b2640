//! GitHub GraphQL client implementation

use crate::error::GitHubError;
use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Public GitHub GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// User-Agent header sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("github-explorer/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// GraphQL client bound to one endpoint and one bearer token
///
/// The token is supplied at construction; the client never reads ambient
/// state such as environment variables.
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) endpoint: String,
    pub(crate) token: String,
}

impl GitHubClient {
    /// Create a client for `endpoint` authenticating with `token`
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Create a client for the public GitHub endpoint
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, token)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a GraphQL document and decode its `data` field into `T`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request cannot be sent
    /// - The endpoint answers with a non-success status
    /// - The response carries GraphQL errors or no data
    /// - The response cannot be parsed
    pub async fn query<V, T>(&self, document: &str, variables: &V) -> Result<T, GitHubError>
    where
        V: Serialize + Sync,
        T: DeserializeOwned,
    {
        debug!(endpoint = %self.endpoint, "sending GraphQL query");

        let payload = GraphQlRequest {
            query: document,
            variables,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GitHubError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: GraphQlResponse<T> = serde_json::from_str(&body)?;

        if !parsed.errors.is_empty() {
            let messages = parsed.errors.into_iter().map(|e| e.message).collect();
            return Err(GitHubError::GraphQl(messages));
        }

        parsed.data.ok_or(GitHubError::MissingData)
    }
}
