// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # issuescout Core
//!
//! Core library for issuescout - finding approachable issues in GitHub
//! repositories for first-time contributors.
//!
//! This crate provides reusable components for:
//! - GitHub REST integration (repository, open issues, README)
//! - Deterministic keyword classification and time estimation
//! - Optional AI summaries via an OpenAI-compatible completion service
//! - Configuration and credential resolution
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use issuescout_core::{Analyzer, Credentials, EnvTokenProvider, load_config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = load_config()?;
//! let credentials = Credentials::resolve(&EnvTokenProvider);
//!
//! // Reuse the analyzer across requests
//! let analyzer = Analyzer::new(&config, credentials)?;
//!
//! let response = analyzer.analyze("https://github.com/rust-lang/rustlings").await?;
//! for issue in &response.issues {
//!     println!("#{} {} ({})", issue.number, issue.title, issue.classification.difficulty);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`classify`] - Keyword classifier
//! - [`estimate`] - Time estimator
//! - [`reconcile`] - Completion/heuristic merge
//! - [`facade`] - Repository analysis entry point
//! - [`github`] - GitHub REST client
//! - [`ai`] - Completion service client

// ============================================================================
// Authentication
// ============================================================================

pub use auth::{Credentials, EnvTokenProvider, TokenProvider};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::IssueScoutError;

/// Convenience Result type for issuescout operations.
///
/// This is equivalent to `std::result::Result<T, IssueScoutError>`.
pub type Result<T> = std::result::Result<T, IssueScoutError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AiConfig, AppConfig, GitHubConfig, ServerConfig, config_dir, config_file_path, load_config,
    load_config_from,
};

// ============================================================================
// Domain Types
// ============================================================================

pub use types::{
    AnalysisResponse, Assignee, ClassificationResult, Difficulty, EnrichedIssue, EstimatedTime,
    Label, RawIssue, RepoMetadata, RepositorySnapshot, TimeBucket,
};

// ============================================================================
// Classification
// ============================================================================

pub use classify::classify;
pub use estimate::estimate;
pub use reconcile::{Reconciled, Reconciler, merge_completion};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::{GitHubClient, RepoRef};

// ============================================================================
// AI Integration
// ============================================================================

pub use ai::{AiClient, AiProvider};

// ============================================================================
// Utilities
// ============================================================================

pub use utils::{truncate, truncate_with_suffix};

// ============================================================================
// Platform-Agnostic Facade
// ============================================================================

pub use facade::{Analyzer, build_snapshot, extract_contributing_section, parse_repo_url};

// ============================================================================
// Modules
// ============================================================================

pub mod ai;
pub mod auth;
pub mod classify;
pub mod config;
pub mod error;
pub mod estimate;
pub mod facade;
pub mod github;
pub mod reconcile;
pub mod types;
pub mod utils;
