// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides repository URL parsing and a small REST client for the three
//! endpoints an analysis needs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::IssueScoutError;

pub mod client;

pub use client::GitHubClient;

/// `https?://github.com/<owner>/<repo>[/...]`
static REPO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://github\.com/([^/]+)/([^/]+)(?:/.*)?$")
        .expect("repository URL pattern is valid")
});

/// An `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoRef {
    /// Creates a reference from its parts.
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Parses a GitHub repository URL.
///
/// Accepts `http` or `https`, ignores any path after the repository segment
/// and strips a trailing `.git`. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `IssueScoutError::InvalidUrl` for anything that is not a
/// `github.com` repository URL. No network call is made.
///
/// # Examples
///
/// ```
/// use issuescout_core::github::parse_repo_url;
///
/// let repo = parse_repo_url("https://github.com/vercel/next.js.git").unwrap();
/// assert_eq!(repo.owner, "vercel");
/// assert_eq!(repo.repo, "next.js");
///
/// assert!(parse_repo_url("https://gitlab.com/vercel/next.js").is_err());
/// ```
pub fn parse_repo_url(input: &str) -> Result<RepoRef, IssueScoutError> {
    let invalid = || IssueScoutError::InvalidUrl {
        url: input.to_string(),
    };

    let captures = REPO_URL.captures(input.trim()).ok_or_else(invalid)?;
    let owner = &captures[1];
    let raw_repo = &captures[2];
    let repo = raw_repo.strip_suffix(".git").unwrap_or(raw_repo);

    if repo.is_empty() {
        return Err(invalid());
    }

    debug!(owner = %owner, repo = %repo, "Parsed repository URL");
    Ok(RepoRef::new(owner, repo))
}
