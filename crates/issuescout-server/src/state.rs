// SPDX-License-Identifier: Apache-2.0

//! Shared application state.

use std::sync::Arc;

use issuescout_core::{Analyzer, AppConfig, Credentials};
use serde::{Deserialize, Serialize};

/// Whether a credential was supplied. Values are never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialStatus {
    /// Credential is set.
    Present,
    /// Credential is missing or empty.
    Missing,
}

impl CredentialStatus {
    fn of<T>(credential: Option<&T>) -> Self {
        if credential.is_some() {
            CredentialStatus::Present
        } else {
            CredentialStatus::Missing
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the process serves requests.
    pub status: String,
    /// GitHub token presence.
    pub github_token: CredentialStatus,
    /// Completion-service key presence.
    pub ai_api_key: CredentialStatus,
}

impl HealthResponse {
    /// Reports which credentials were resolved at startup.
    #[must_use]
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            status: "ok".to_string(),
            github_token: CredentialStatus::of(credentials.github_token.as_ref()),
            ai_api_key: CredentialStatus::of(credentials.ai_api_key.as_ref()),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Analyzer shared by all requests
    pub analyzer: Arc<Analyzer>,
    /// Credential report served by `/health`
    pub health: HealthResponse,
}

impl AppState {
    /// Builds the analyzer from configuration and credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(config: &AppConfig, credentials: Credentials) -> anyhow::Result<Self> {
        let health = HealthResponse::from_credentials(&credentials);
        let analyzer = Analyzer::new(config, credentials)?;
        Ok(Self {
            analyzer: Arc::new(analyzer),
            health,
        })
    }
}

#[cfg(test)]
mod tests {
    use issuescout_core::Credentials;

    use super::*;

    #[test]
    fn anonymous_credentials_are_missing() {
        let health = HealthResponse::from_credentials(&Credentials::anonymous());
        assert_eq!(health.status, "ok");
        assert_eq!(health.github_token, CredentialStatus::Missing);
        assert_eq!(health.ai_api_key, CredentialStatus::Missing);
    }
}
