// SPDX-License-Identifier: Apache-2.0

//! Completion-service client.
//!
//! Holds the HTTP client, API key, and model configuration for reuse across
//! the concurrent summaries of a single analysis.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::SecretString;

use super::GROQ_API_KEY_ENV;
use super::provider::AiProvider;
use crate::config::AiConfig;

/// Generic OpenAI-compatible completion client.
#[derive(Debug)]
pub struct AiClient {
    /// Provider name used in logs and errors.
    provider: String,
    /// Chat completions endpoint.
    api_url: String,
    /// HTTP client with configured timeout.
    http: Client,
    /// API key for provider authentication.
    api_key: SecretString,
    /// Model name (e.g., "llama3-8b-8192").
    model: String,
    /// Maximum tokens for API responses.
    max_tokens: u32,
    /// Temperature for API requests.
    temperature: f32,
}

impl AiClient {
    /// Creates a new AI client with a provided API key.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn with_api_key(api_key: SecretString, config: &AiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            provider: config.provider.clone(),
            api_url: config.api_url.clone(),
            http,
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl AiProvider for AiClient {
    fn name(&self) -> &str {
        &self.provider
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn api_key_env(&self) -> &str {
        GROQ_API_KEY_ENV
    }

    fn http_client(&self) -> &Client {
        &self.http
    }

    fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawIssue;

    fn test_config(api_url: String) -> AiConfig {
        AiConfig {
            api_url,
            ..AiConfig::default()
        }
    }

    fn issue() -> RawIssue {
        RawIssue::builder()
            .id(1)
            .number(3)
            .title("Crash when config is missing")
            .body("Steps: delete config.toml and run")
            .build()
    }

    #[test]
    fn uses_config_values() {
        let client = AiClient::with_api_key(
            SecretString::from("key"),
            &test_config("http://localhost/v1".to_string()),
        )
        .unwrap();
        assert_eq!(client.name(), "groq");
        assert_eq!(client.model(), "llama3-8b-8192");
        assert_eq!(client.max_tokens(), 200);
        assert!((client.temperature() - 0.7).abs() < f32::EPSILON);
        assert_eq!(client.api_url(), "http://localhost/v1");
    }

    #[tokio::test]
    async fn summarize_returns_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer secret")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"model":"llama3-8b-8192","max_tokens":200}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"Add a guard. 1-2 hours"}}]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = AiClient::with_api_key(
            SecretString::from("secret"),
            &test_config(format!("{}/v1/chat/completions", server.url())),
        )
        .unwrap();

        let content = client.summarize_issue(&issue()).await.unwrap();
        assert_eq!(content, "Add a guard. 1-2 hours");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn summarize_fails_on_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let client = AiClient::with_api_key(
            SecretString::from("secret"),
            &test_config(format!("{}/v1/chat/completions", server.url())),
        )
        .unwrap();

        let err = client.summarize_issue(&issue()).await.unwrap_err();
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[tokio::test]
    async fn summarize_rejects_invalid_key() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .create_async()
            .await;

        let client = AiClient::with_api_key(
            SecretString::from("wrong"),
            &test_config(format!("{}/v1/chat/completions", server.url())),
        )
        .unwrap();

        let err = client.summarize_issue(&issue()).await.unwrap_err();
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[tokio::test]
    async fn summarize_fails_on_empty_choices() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = AiClient::with_api_key(
            SecretString::from("secret"),
            &test_config(format!("{}/v1/chat/completions", server.url())),
        )
        .unwrap();

        let err = client.summarize_issue(&issue()).await.unwrap_err();
        assert!(err.to_string().contains("No response from AI model"));
    }
}
