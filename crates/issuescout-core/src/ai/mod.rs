// SPDX-License-Identifier: Apache-2.0

//! AI integration module.
//!
//! Provides issue summaries from an OpenAI-compatible completion service
//! (Groq by default).

pub mod client;
pub mod provider;
pub mod types;

pub use client::AiClient;
pub use provider::AiProvider;

/// Groq chat completions URL.
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Environment variable for the Groq API key.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";
