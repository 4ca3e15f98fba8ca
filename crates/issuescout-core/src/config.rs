// SPDX-License-Identifier: Apache-2.0

//! Configuration management for issuescout.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `ISSUESCOUT_`)
//! 2. Config file: `~/.config/issuescout/config.toml`
//! 3. Built-in defaults
//!
//! Credentials are deliberately absent here; see [`crate::auth`].
//!
//! # Examples
//!
//! ```bash
//! # Override the completion model via environment variable
//! ISSUESCOUT_AI__MODEL=llama-3.1-8b-instant issuescout serve
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::ai::GROQ_API_URL;
use crate::error::IssueScoutError;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Completion service settings.
    pub ai: AiConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

/// GitHub API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL.
    pub api_url: String,
    /// API request timeout in seconds.
    pub timeout_seconds: u64,
    /// Number of open issues fetched per analysis.
    pub issues_per_page: u8,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            timeout_seconds: 10,
            issues_per_page: 30,
        }
    }
}

/// Completion service settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Provider name, used in logs.
    pub provider: String,
    /// Chat completions endpoint.
    pub api_url: String,
    /// Model identifier.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum tokens for API responses.
    pub max_tokens: u32,
    /// Temperature for API requests (0.0-1.0).
    pub temperature: f32,
    /// How many leading issues are summarized by the model.
    pub max_ai_issues: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            api_url: GROQ_API_URL.to_string(),
            model: "llama3-8b-8192".to_string(),
            timeout_seconds: 30,
            max_tokens: 200,
            temperature: 0.7,
            max_ai_issues: 5,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Returns the issuescout configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/issuescout`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("issuescout");
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".config")
        .join("issuescout")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration from the default file location.
///
/// # Errors
///
/// Returns `IssueScoutError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, IssueScoutError> {
    load_config_from(&config_file_path())
}

/// Load application configuration from `path` (optional) plus environment.
///
/// Environment variables use the prefix `ISSUESCOUT_` and double underscore
/// for nested keys (e.g., `ISSUESCOUT_SERVER__PORT`).
///
/// # Errors
///
/// Returns `IssueScoutError::Config` if the file exists but is invalid.
pub fn load_config_from(path: &Path) -> Result<AppConfig, IssueScoutError> {
    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::from(path).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("ISSUESCOUT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.issues_per_page, 30);
        assert_eq!(config.ai.provider, "groq");
        assert_eq!(config.ai.model, "llama3-8b-8192");
        assert_eq!(config.ai.max_tokens, 200);
        assert_eq!(config.ai.max_ai_issues, 5);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    #[serial]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[ai]
model = "llama-3.1-8b-instant"
max_ai_issues = 3

[server]
port = 8080
"#
        )
        .unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.ai.model, "llama-3.1-8b-instant");
        assert_eq!(config.ai.max_ai_issues, 3);
        assert_eq!(config.ai.provider, "groq");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    #[serial]
    fn test_invalid_config_file_is_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = \"not a port\"").unwrap();

        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, IssueScoutError::Config { .. }));
    }

    #[test]
    #[serial]
    #[allow(unsafe_code)]
    fn test_env_overrides_file() {
        // SAFETY: serialized test; no other thread reads the environment.
        unsafe {
            std::env::set_var("ISSUESCOUT_SERVER__PORT", "9090");
        }

        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml"));

        unsafe {
            std::env::remove_var("ISSUESCOUT_SERVER__PORT");
        }

        assert_eq!(config.unwrap().server.port, 9090);
    }

    #[test]
    #[serial]
    #[allow(unsafe_code)]
    fn test_config_dir_respects_xdg_config_home() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/custom/config");
        }

        let dir = config_dir();
        assert_eq!(dir, PathBuf::from("/custom/config/issuescout"));

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_file_path() {
        assert!(config_file_path().ends_with("issuescout/config.toml"));
    }
}
