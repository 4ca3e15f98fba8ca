// SPDX-License-Identifier: Apache-2.0

//! AI provider trait and shared implementations.
//!
//! Defines the `AiProvider` trait for OpenAI-compatible completion services,
//! along with default implementations for prompt building, request sending,
//! and response extraction.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::SecretString;
use tracing::{debug, instrument};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::error::IssueScoutError;
use crate::types::RawIssue;

/// System prompt for issue summaries.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for open source contributors.";

/// Builds the user prompt asking for a summary followed by an hours estimate.
///
/// The body is embedded in full.
#[must_use]
pub fn build_user_prompt(issue: &RawIssue) -> String {
    format!(
        "Summarize the following GitHub issue for a new contributor. Only return the summary, \
         do not preface with any explanation. Then estimate the time to complete (in hours, \
         e.g. '<1 hour', '1-3 hours', '3+ hours').\n\nTitle: {}\n\nBody: {}",
        issue.title,
        issue.body_text()
    )
}

/// AI provider trait for chat-completion backed summaries.
///
/// Implementors supply connection details; request sending and prompt
/// assembly are shared.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Returns the name of the provider (e.g., "groq").
    fn name(&self) -> &str;

    /// Returns the chat completions URL for this provider.
    fn api_url(&self) -> &str;

    /// Returns the environment variable name for the API key.
    fn api_key_env(&self) -> &str;

    /// Returns the HTTP client for making requests.
    fn http_client(&self) -> &Client;

    /// Returns the API key for authentication.
    fn api_key(&self) -> &SecretString;

    /// Returns the model name.
    fn model(&self) -> &str;

    /// Returns the maximum tokens for API responses.
    fn max_tokens(&self) -> u32;

    /// Returns the temperature for API requests.
    fn temperature(&self) -> f32;

    /// Builds HTTP headers for API requests.
    ///
    /// Default implementation sets the JSON content type. Providers can
    /// override to add custom headers.
    fn build_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(val) = "application/json".parse() {
            headers.insert("Content-Type", val);
        }
        headers
    }

    /// Sends a chat completion request. Exactly one attempt, no retry.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, any non-success status, or an
    /// unparseable response body.
    async fn send_request(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        use secrecy::ExposeSecret;
        use tracing::warn;

        let mut req = self.http_client().post(self.api_url());

        req = req.header(
            "Authorization",
            format!("Bearer {}", self.api_key().expose_secret()),
        );

        for (key, value) in &self.build_headers() {
            req = req.header(key.clone(), value.clone());
        }

        let response = req
            .json(request)
            .send()
            .await
            .context(format!("Failed to send request to {} API", self.name()))?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 401 {
                anyhow::bail!(IssueScoutError::Ai {
                    message: format!(
                        "Invalid {} API key. Check your {} environment variable.",
                        self.name(),
                        self.api_key_env()
                    ),
                    status: Some(401),
                    provider: self.name().to_string(),
                });
            } else if status.as_u16() == 429 {
                warn!("Rate limited by {} API", self.name());
            }
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(IssueScoutError::Ai {
                message: format!(
                    "{} API error (HTTP {}): {}",
                    self.name(),
                    status.as_u16(),
                    error_body
                ),
                status: Some(status.as_u16()),
                provider: self.name().to_string(),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context(format!("Failed to parse {} API response", self.name()))?;

        Ok(completion)
    }

    /// Asks the model for a contributor summary of `issue`.
    ///
    /// Returns the raw completion text; interpretation is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the completion is empty.
    #[instrument(skip(self, issue), fields(issue_number = issue.number))]
    async fn summarize_issue(&self, issue: &RawIssue) -> Result<String> {
        debug!(model = %self.model(), "Calling {} API", self.name());

        let request = ChatCompletionRequest {
            model: self.model().to_string(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_user_prompt(issue)),
            ],
            max_tokens: Some(self.max_tokens()),
            temperature: Some(self.temperature()),
        };

        let completion = self.send_request(&request).await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .context("No response from AI model")?;

        debug!(response_length = content.len(), "Received AI response");

        Ok(content)
    }
}
