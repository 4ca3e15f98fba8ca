// SPDX-License-Identifier: Apache-2.0

//! Minimal GitHub REST client.
//!
//! One request per call, no retries. Status codes are mapped onto
//! [`IssueScoutError`] so the server can answer with the right HTTP status.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use super::RepoRef;
use crate::config::GitHubConfig;
use crate::error::IssueScoutError;
use crate::types::{RawIssue, RepoMetadata};

/// Media type for JSON responses.
const JSON_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Media type that makes the readme endpoint return the raw file.
const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";

/// User-Agent sent with every request (GitHub rejects requests without one).
const USER_AGENT: &str = concat!("issuescout/", env!("CARGO_PKG_VERSION"));

/// GitHub REST client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: Option<SecretString>,
}

impl GitHubClient {
    /// Creates a client from configuration and an optional token.
    ///
    /// # Errors
    ///
    /// Returns `IssueScoutError::Network` if the HTTP client cannot be built.
    pub fn new(config: &GitHubConfig, token: Option<SecretString>) -> Result<Self, IssueScoutError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Whether requests carry a token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn get(&self, path: &str, accept: &'static str) -> RequestBuilder {
        let mut request = self
            .http
            .get(format!("{}{path}", self.base_url))
            .header(ACCEPT, HeaderValue::from_static(accept));

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token.expose_secret()));
        }

        request
    }

    /// Fetches repository metadata.
    ///
    /// # Errors
    ///
    /// `NotFound` on 404, `RateLimited` on 403/429, `GitHub` on any other
    /// non-success status, `Network` on transport or decode failure.
    #[instrument(skip(self), fields(repo = %repo))]
    pub async fn fetch_repo(&self, repo: &RepoRef) -> Result<RepoMetadata, IssueScoutError> {
        debug!("Fetching repository metadata");

        let response = self
            .get(&format!("/repos/{}/{}", repo.owner, repo.repo), JSON_MEDIA_TYPE)
            .send()
            .await?;
        let metadata: RepoMetadata = check_status(response, repo).await?.json().await?;

        debug!(stars = metadata.stargazers_count, "Fetched repository metadata");
        Ok(metadata)
    }

    /// Fetches up to `per_page` open issues, most recently updated first.
    ///
    /// # Errors
    ///
    /// Same mapping as [`GitHubClient::fetch_repo`].
    #[instrument(skip(self), fields(repo = %repo))]
    pub async fn fetch_open_issues(
        &self,
        repo: &RepoRef,
        per_page: u8,
    ) -> Result<Vec<RawIssue>, IssueScoutError> {
        debug!("Fetching open issues");

        let path = format!(
            "/repos/{}/{}/issues?state=open&per_page={per_page}&sort=updated",
            repo.owner, repo.repo
        );
        let response = self.get(&path, JSON_MEDIA_TYPE).send().await?;
        let issues: Vec<RawIssue> = check_status(response, repo).await?.json().await?;

        debug!(count = issues.len(), "Fetched open issues");
        Ok(issues)
    }

    /// Fetches the raw README text.
    ///
    /// Any non-success status (missing README included) yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `IssueScoutError::Network` only on transport failure.
    #[instrument(skip(self), fields(repo = %repo))]
    pub async fn fetch_readme(&self, repo: &RepoRef) -> Result<Option<String>, IssueScoutError> {
        let response = self
            .get(&format!("/repos/{}/{}/readme", repo.owner, repo.repo), RAW_MEDIA_TYPE)
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(status = response.status().as_u16(), "No README available");
            return Ok(None);
        }

        let text = response.text().await?;
        debug!(length = text.len(), "Fetched README");
        Ok(Some(text))
    }
}

/// Maps a non-success status to the matching error.
async fn check_status(response: Response, repo: &RepoRef) -> Result<Response, IssueScoutError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => Err(IssueScoutError::NotFound {
            owner: repo.owner.clone(),
            repo: repo.repo.clone(),
        }),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            warn!(status = status.as_u16(), "GitHub rate limit hit");
            Err(IssueScoutError::RateLimited)
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown").to_string()
            } else {
                body
            };
            Err(IssueScoutError::GitHub {
                status: status.as_u16(),
                message,
            })
        }
    }
}
