//! Path routing between the dashboard and the repository page

use anyhow::{Result, anyhow};
use explorer_github::split_name_with_owner;
use std::fmt;
use std::str::FromStr;

/// A page of the explorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Dashboard,
    /// `/repository/<owner>/<name>`
    Repository { owner: String, name: Option<String> },
}

impl Route {
    /// Parse a path such as `/` or `/repository/facebook/react`
    ///
    /// The leading slash is optional and trailing slashes are ignored.
    ///
    /// # Errors
    /// Returns an error if the path matches no page
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Dashboard);
        }

        if let Some(captures) = regex::Regex::new(r"^repository/(.+)$")?.captures(trimmed)
            && let Some(rest) = captures.get(1)
        {
            let (owner, name) = split_name_with_owner(rest.as_str());
            return Ok(Route::Repository { owner, name });
        }

        Err(anyhow!("Unknown route: {}", path))
    }

    /// Route to the page of a repository given as `owner/name`
    pub fn repository(name_with_owner: &str) -> Self {
        let (owner, name) = split_name_with_owner(name_with_owner);
        Route::Repository { owner, name }
    }

    /// Path of this route
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Repository { owner, name } => match name {
                Some(name) => format!("/repository/{owner}/{name}"),
                None => format!("/repository/{owner}"),
            },
        }
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
