// SPDX-License-Identifier: Apache-2.0

//! Credential resolution.
//!
//! The `TokenProvider` trait abstracts where credentials come from. The
//! process resolves them once into [`Credentials`], which is then passed
//! explicitly to [`crate::facade::Analyzer`]; nothing downstream reads the
//! environment.
//!
//! Both credentials are optional. Without a GitHub token requests run under
//! the unauthenticated rate limit; without a completion key every issue takes
//! the heuristic path.

use secrecy::SecretString;

use crate::ai::GROQ_API_KEY_ENV;

/// Environment variable for the GitHub API token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Provides GitHub and completion-service credentials.
///
/// Implementations return `None` if a credential is not available.
pub trait TokenProvider: Send + Sync {
    /// Retrieves the GitHub API token.
    fn github_token(&self) -> Option<SecretString>;

    /// Retrieves the completion-service API key.
    fn ai_api_key(&self) -> Option<SecretString>;
}

/// Resolves credentials from `GITHUB_TOKEN` and `GROQ_API_KEY`.
///
/// Empty values count as absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvTokenProvider;

fn non_empty_env(name: &str) -> Option<SecretString> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(SecretString::from)
}

impl TokenProvider for EnvTokenProvider {
    fn github_token(&self) -> Option<SecretString> {
        non_empty_env(GITHUB_TOKEN_ENV)
    }

    fn ai_api_key(&self) -> Option<SecretString> {
        non_empty_env(GROQ_API_KEY_ENV)
    }
}

/// Credentials resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// GitHub API token.
    pub github_token: Option<SecretString>,
    /// Completion-service API key.
    pub ai_api_key: Option<SecretString>,
}

impl Credentials {
    /// Snapshots the credentials offered by `provider`.
    #[must_use]
    pub fn resolve(provider: &dyn TokenProvider) -> Self {
        Self {
            github_token: provider.github_token(),
            ai_api_key: provider.ai_api_key(),
        }
    }

    /// No credentials at all: unauthenticated GitHub, heuristic-only issues.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }
}
