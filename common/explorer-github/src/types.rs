//! Response payload types
//!
//! Field names follow the GraphQL schema (camelCase on the wire).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

/// Fields returned by the lookup query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub name_with_owner: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: Owner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

/// Author of an issue; `None` on the issue when the account was deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueNode {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub author: Option<Actor>,
}

impl IssueNode {
    /// Login of the author, `ghost` for deleted accounts
    pub fn author_login(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.login.as_str())
            .unwrap_or("ghost")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueConnection {
    pub total_count: u64,
    #[serde(default)]
    pub nodes: Vec<IssueNode>,
}

/// Fields returned by the detail query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDetail {
    pub id: String,
    pub name_with_owner: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stargazers: TotalCount,
    pub fork_count: u64,
    pub owner: Owner,
    pub issues: IssueConnection,
}
