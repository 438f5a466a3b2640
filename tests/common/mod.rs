//! Common test support utilities and fixtures
//!
//! This module provides a scripted [`RepositoryApi`] and repository fixtures
//! shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use explorer::SearchEntry;
use explorer_github::{
    Actor, GitHubError, IssueConnection, IssueNode, Owner, RepositoryApi, RepositoryDetail,
    TotalCount,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory API answering from fixed fixtures
#[derive(Default)]
pub struct FakeApi {
    summaries: HashMap<String, SearchEntry>,
    details: HashMap<String, RepositoryDetail>,
    fail_with_status: Option<u16>,
    calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer lookups for `name_with_owner`
    pub fn with_repository(mut self, name_with_owner: &str) -> Self {
        self.summaries
            .insert(name_with_owner.to_string(), summary(name_with_owner));
        self
    }

    /// Answer detail queries for the repository
    pub fn with_detail(mut self, detail: RepositoryDetail) -> Self {
        self.details.insert(detail.name_with_owner.clone(), detail);
        self
    }

    /// Fail every request with an HTTP status
    pub fn failing(mut self, status: u16) -> Self {
        self.fail_with_status = Some(status);
        self
    }

    /// Number of requests received
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn key(owner: &str, name: Option<&str>) -> Result<String, GitHubError> {
        match name {
            Some(name) => Ok(format!("{owner}/{name}")),
            None => Err(GitHubError::GraphQl(vec![
                "Variable $name of type String! was provided invalid value".to_string(),
            ])),
        }
    }

    fn check_failure(&self) -> Result<(), GitHubError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with_status {
            Some(status) => Err(GitHubError::Status {
                status,
                body: "scripted failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RepositoryApi for FakeApi {
    async fn lookup_repository(
        &self,
        owner: &str,
        name: Option<&str>,
    ) -> Result<Option<SearchEntry>, GitHubError> {
        self.check_failure()?;
        let key = Self::key(owner, name)?;
        Ok(self.summaries.get(&key).cloned())
    }

    async fn repository_with_issues(
        &self,
        owner: &str,
        name: Option<&str>,
    ) -> Result<Option<RepositoryDetail>, GitHubError> {
        self.check_failure()?;
        let key = Self::key(owner, name)?;
        Ok(self.details.get(&key).cloned())
    }
}

/// Summary fixture for `owner/name`
pub fn summary(name_with_owner: &str) -> SearchEntry {
    let owner = name_with_owner.split('/').next().unwrap_or_default();
    SearchEntry {
        name_with_owner: name_with_owner.to_string(),
        description: Some(format!("Description of {name_with_owner}")),
        owner: Owner {
            login: owner.to_string(),
            avatar_url: format!("https://avatars.githubusercontent.com/{owner}"),
        },
    }
}

/// Detail fixture with `issue_count` issues numbered from 1
pub fn detail(name_with_owner: &str, issue_count: usize) -> RepositoryDetail {
    let base = summary(name_with_owner);
    let nodes = (1..=issue_count)
        .map(|n| IssueNode {
            id: format!("I_{n}"),
            title: format!("Issue number {n}"),
            url: format!("https://github.com/{name_with_owner}/issues/{n}"),
            author: Some(Actor {
                login: format!("user{n}"),
            }),
        })
        .collect();

    RepositoryDetail {
        id: format!("R_{name_with_owner}"),
        name_with_owner: base.name_with_owner,
        description: base.description,
        stargazers: TotalCount {
            total_count: 228_431,
        },
        fork_count: 46_712,
        owner: base.owner,
        issues: IssueConnection {
            total_count: 812,
            nodes,
        },
    }
}
