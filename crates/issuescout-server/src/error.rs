// SPDX-License-Identifier: Apache-2.0

//! Conversion from core errors to HTTP error responses.
//!
//! Every failure reaches the client as `{ "error": "<message>" }`. Messages
//! are fixed per category; upstream detail only goes to the log.

use axum::Json;
use axum::http::StatusCode;
use issuescout_core::IssueScoutError;
use serde::{Deserialize, Serialize};

/// Message for a missing or empty `repoUrl`.
pub const MISSING_URL: &str = "Repository URL is required";

/// Message for a request body that is not valid JSON.
pub const INVALID_BODY: &str = "Invalid request body";

/// Message for a URL that is not a GitHub repository.
pub const INVALID_URL: &str = "Invalid GitHub repository URL";

/// Message for an unknown or private repository.
pub const NOT_FOUND: &str = "Repository not found or is private";

/// Message for an exhausted GitHub rate limit.
pub const RATE_LIMITED: &str = "Rate limit exceeded. Please try again later.";

/// Message for every other failure.
pub const ANALYSIS_FAILED: &str = "Failed to analyze repository. Please try again.";

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error body.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Handler error type.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// A 400 response with `msg`.
#[must_use]
pub fn bad_request(msg: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg)))
}

/// Maps a core error to status and message.
///
/// - `InvalidUrl` -> 400
/// - `NotFound` -> 404
/// - `RateLimited` -> 429
/// - All others -> 500
#[must_use]
pub fn to_api_error(err: &IssueScoutError) -> ApiError {
    let (status, message) = match err {
        IssueScoutError::InvalidUrl { .. } => (StatusCode::BAD_REQUEST, INVALID_URL),
        IssueScoutError::NotFound { .. } => (StatusCode::NOT_FOUND, NOT_FOUND),
        IssueScoutError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, RATE_LIMITED),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED),
    };
    (status, Json(ErrorResponse::new(message)))
}
