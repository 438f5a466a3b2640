//! GraphQL query documents

use serde::{Deserialize, Serialize};

/// Lookup query used when a repository is searched
pub const REPOSITORY: &str = r#"
query REPOSITORY($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    nameWithOwner
    description
    owner {
      login
      avatarUrl
    }
  }
}
"#;

/// Detail query with counters and the last five issues
pub const REPOSITORY_WITH_ISSUES: &str = r#"
query REPOSITORY_WITH_ISSUES($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    id
    nameWithOwner
    stargazers {
      totalCount
    }
    forkCount
    description
    owner {
      login
      avatarUrl
    }
    issues(last: 5) {
      totalCount
      nodes {
        id
        title
        url
        author {
          login
        }
      }
    }
  }
}
"#;

/// Variables shared by both repository queries
///
/// `name` is sent as `null` when the input had no `/`; the API rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryVars {
    pub owner: String,
    pub name: Option<String>,
}

impl RepositoryVars {
    pub fn new(owner: &str, name: Option<&str>) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.map(str::to_string),
        }
    }
}

/// `data` payload of both queries
#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryData<T> {
    pub repository: Option<T>,
}
