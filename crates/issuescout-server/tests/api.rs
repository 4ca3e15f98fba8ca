// SPDX-License-Identifier: Apache-2.0

//! Router tests driven through `tower::ServiceExt::oneshot`.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use issuescout_core::{AppConfig, Credentials, GitHubConfig};
use issuescout_server::{AppState, ErrorResponse, HealthResponse, router};
use serde_json::Value;
use tower::ServiceExt;

/// State whose GitHub client points at `api_url`.
fn state_for(api_url: String) -> AppState {
    let config = AppConfig {
        github: GitHubConfig {
            api_url,
            ..GitHubConfig::default()
        },
        ..AppConfig::default()
    };
    AppState::new(&config, Credentials::anonymous()).unwrap()
}

/// State that must never reach the network.
fn offline_state() -> AppState {
    state_for("http://127.0.0.1:9".to_string())
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze-repo")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_missing_credentials() {
    let response = router(offline_state())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthResponse = read_json(response).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.ai_api_key, issuescout_server::CredentialStatus::Missing);
}

#[tokio::test]
async fn missing_url_is_bad_request() {
    for body in [r"{}", r#"{"repoUrl":""}"#, r#"{"repoUrl":"   "}"#, r#"{"repoUrl":null}"#] {
        let response = router(offline_state())
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let error: ErrorResponse = read_json(response).await;
        assert_eq!(error.error, "Repository URL is required");
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = router(offline_state())
        .oneshot(analyze_request("{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "Invalid request body");
}

#[tokio::test]
async fn non_github_url_is_bad_request() {
    let response = router(offline_state())
        .oneshot(analyze_request(r#"{"repoUrl":"https://gitlab.com/a/b"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "Invalid GitHub repository URL");
}

#[tokio::test]
async fn unknown_repository_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _repo = server
        .mock("GET", "/repos/octocat/missing")
        .with_status(404)
        .create_async()
        .await;
    let _issues = server
        .mock("GET", "/repos/octocat/missing/issues")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .create_async()
        .await;
    let _readme = server
        .mock("GET", "/repos/octocat/missing/readme")
        .with_status(404)
        .create_async()
        .await;

    let response = router(state_for(server.url()))
        .oneshot(analyze_request(
            r#"{"repoUrl":"https://github.com/octocat/missing"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "Repository not found or is private");
}

#[tokio::test]
async fn successful_analysis_uses_frontend_shape() {
    let mut server = mockito::Server::new_async().await;
    let _repo = server
        .mock("GET", "/repos/octocat/hello")
        .with_status(200)
        .with_body(
            r#"{"name":"hello","description":"Greets","html_url":"https://github.com/octocat/hello","stargazers_count":5,"language":"Rust"}"#,
        )
        .create_async()
        .await;
    let _issues = server
        .mock("GET", "/repos/octocat/hello/issues")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(
            r#"[{"id":1,"number":3,"title":"Fix typo in README","body":null,"html_url":"https://github.com/octocat/hello/issues/3","state":"open","labels":[{"id":9,"name":"good first issue","color":"7057ff","description":null}],"created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-02T00:00:00Z","assignees":[]}]"#,
        )
        .create_async()
        .await;
    let _readme = server
        .mock("GET", "/repos/octocat/hello/readme")
        .with_status(404)
        .create_async()
        .await;

    let response = router(state_for(server.url()))
        .oneshot(analyze_request(
            r#"{"repoUrl":"https://github.com/octocat/hello"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = read_json(response).await;

    assert_eq!(json["repoData"]["name"], "hello");
    assert_eq!(json["repoData"]["stars"], 5);
    assert_eq!(json["repoData"]["language"], "Rust");
    assert!(json["repoData"].get("readme").is_none());

    let issue = &json["issues"][0];
    assert_eq!(issue["number"], 3);
    assert_eq!(issue["difficulty"], "easy");
    assert_eq!(issue["summary"], "No description provided.");
    assert_eq!(issue["estimatedTime"], "<1 hour");
    assert_eq!(issue["ai"], false);
}
