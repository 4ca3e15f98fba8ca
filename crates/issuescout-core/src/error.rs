// SPDX-License-Identifier: Apache-2.0

//! Error types for issuescout.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while analyzing a repository.
#[derive(Error, Debug)]
pub enum IssueScoutError {
    /// The input is not a `https://github.com/<owner>/<repo>` URL.
    #[error("Invalid GitHub repository URL: {url}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
    },

    /// GitHub answered 404 - the repository does not exist or is private.
    #[error("Repository {owner}/{repo} not found or is private")]
    NotFound {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repo: String,
    },

    /// GitHub answered 403 - the (secondary) rate limit was hit.
    #[error("GitHub rate limit exceeded, retry later")]
    RateLimited,

    /// Any other non-success answer from the GitHub API.
    #[error("GitHub API error: {status} {message}")]
    GitHub {
        /// HTTP status code.
        status: u16,
        /// Status text or response body.
        message: String,
    },

    /// Completion service error.
    ///
    /// Never reaches the caller of an analysis: the reconciler downgrades
    /// the affected issue to the heuristic path instead.
    #[error("AI provider error: {message}")]
    Ai {
        /// Error message from the AI provider.
        message: String,
        /// Optional HTTP status code from the provider.
        status: Option<u16>,
        /// Name of the AI provider (e.g., `groq`).
        provider: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Network/HTTP error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl IssueScoutError {
    /// Returns true for errors caused by the caller's input rather than upstream.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, IssueScoutError::InvalidUrl { .. })
    }
}

impl From<config::ConfigError> for IssueScoutError {
    fn from(err: config::ConfigError) -> Self {
        IssueScoutError::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_is_validation() {
        let err = IssueScoutError::InvalidUrl {
            url: "https://gitlab.com/a/b".to_string(),
        };
        assert!(err.is_validation());
        assert!(err.to_string().contains("gitlab.com"));
    }

    #[test]
    fn upstream_errors_are_not_validation() {
        assert!(!IssueScoutError::RateLimited.is_validation());
        let err = IssueScoutError::GitHub {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "GitHub API error: 502 Bad Gateway");
    }

    #[test]
    fn not_found_names_repository() {
        let err = IssueScoutError::NotFound {
            owner: "octocat".to_string(),
            repo: "missing".to_string(),
        };
        assert!(err.to_string().contains("octocat/missing"));
    }
}
