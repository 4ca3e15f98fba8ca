// SPDX-License-Identifier: Apache-2.0

//! REST API handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use issuescout_core::AnalysisResponse;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::error::{ApiError, INVALID_BODY, MISSING_URL, bad_request, to_api_error};
use crate::state::{AppState, HealthResponse};

/// Body of `POST /api/analyze-repo`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// GitHub repository URL.
    #[serde(default)]
    pub repo_url: Option<String>,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.health.clone())
}

/// Analyze a repository's open issues
pub async fn analyze_repo(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected request body");
        bad_request(INVALID_BODY)
    })?;

    let repo_url = request
        .repo_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| bad_request(MISSING_URL))?;

    match state.analyzer.analyze(&repo_url).await {
        Ok(response) => {
            info!(
                repo = %response.repo_data.name,
                issues = response.issues.len(),
                "Served analysis"
            );
            Ok(Json(response))
        }
        Err(e) => {
            if e.is_validation() {
                warn!(url = %repo_url, "Invalid repository URL");
            } else {
                error!(url = %repo_url, error = %e, "Failed to analyze repository");
            }
            Err(to_api_error(&e))
        }
    }
}
