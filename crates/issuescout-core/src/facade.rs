// SPDX-License-Identifier: Apache-2.0

//! Repository analysis entry point.
//!
//! [`Analyzer::analyze`] is the one operation every caller (HTTP server,
//! CLI) goes through: parse the URL, fetch metadata, issues and README
//! concurrently, then classify. The leading `max_ai_issues` issues are
//! reconciled with the completion service in parallel; the rest are
//! classified directly. Reconciled issues come first in the output.

use std::sync::LazyLock;

use bon::Builder;
use futures::future::join_all;
use regex::Regex;
use tracing::{debug, info, instrument};

use crate::auth::Credentials;
use crate::classify::classify;
use crate::config::AppConfig;
use crate::github::{GitHubClient, RepoRef};
use crate::reconcile::Reconciler;
use crate::types::{AnalysisResponse, EnrichedIssue, RepoMetadata, RepositorySnapshot};

pub use crate::github::parse_repo_url;

/// Snapshot description when the repository has none.
pub const NO_REPO_DESCRIPTION: &str = "No description available";

/// Snapshot language when GitHub detected none.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// `# Contributing` or `## Contributing`, any case.
static CONTRIBUTING_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)##? Contributing").expect("contributing heading pattern is valid")
});

/// Headings that close a contributing section.
const SECTION_BOUNDARIES: [&str; 2] = ["\n## ", "\n# "];

/// Extracts the README's "Contributing" section.
///
/// The section runs from the first `#`/`##` "Contributing" heading up to the
/// next first- or second-level heading, or the end of the text, and is
/// trimmed. The result is always a substring of `readme`.
///
/// # Examples
///
/// ```
/// use issuescout_core::facade::extract_contributing_section;
///
/// let readme = "# App\n\n## Contributing\nOpen a PR.\n\n## License\nMIT";
/// assert_eq!(
///     extract_contributing_section(Some(readme)).as_deref(),
///     Some("## Contributing\nOpen a PR.")
/// );
/// assert!(extract_contributing_section(Some("# App")).is_none());
/// assert!(extract_contributing_section(None).is_none());
/// ```
#[must_use]
pub fn extract_contributing_section(readme: Option<&str>) -> Option<String> {
    let readme = readme?;
    let heading = CONTRIBUTING_HEADING.find(readme)?;

    let tail = &readme[heading.end()..];
    let end = SECTION_BOUNDARIES
        .iter()
        .filter_map(|boundary| tail.find(boundary))
        .min()
        .map_or(readme.len(), |offset| heading.end() + offset);

    Some(readme[heading.start()..end].trim().to_string())
}

/// Builds the repository snapshot, filling in display defaults.
#[must_use]
pub fn build_snapshot(metadata: RepoMetadata, readme: Option<String>) -> RepositorySnapshot {
    let contributing_excerpt = extract_contributing_section(readme.as_deref());

    RepositorySnapshot {
        name: metadata.name,
        description: metadata
            .description
            .filter(|description| !description.is_empty())
            .unwrap_or_else(|| NO_REPO_DESCRIPTION.to_string()),
        url: metadata.html_url,
        star_count: metadata.stargazers_count,
        primary_language: metadata
            .language
            .filter(|language| !language.is_empty())
            .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
        raw_readme: readme,
        contributing_excerpt,
    }
}

/// Analyzes GitHub repositories for approachable issues.
///
/// Holds no per-request state; one instance serves concurrent analyses.
#[derive(Debug, Builder)]
pub struct Analyzer {
    github: GitHubClient,
    #[builder(default)]
    reconciler: Reconciler,
    /// Open issues fetched per analysis.
    #[builder(default = 30)]
    issues_per_page: u8,
    /// Leading issues sent to the completion service.
    #[builder(default = 5)]
    max_ai_issues: usize,
}

impl Analyzer {
    /// Creates an analyzer from configuration and resolved credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(config: &AppConfig, credentials: Credentials) -> anyhow::Result<Self> {
        let github = GitHubClient::new(&config.github, credentials.github_token)?;
        let reconciler = Reconciler::new(credentials.ai_api_key, &config.ai)?;

        info!(
            github_authenticated = github.is_authenticated(),
            ai_enabled = reconciler.has_ai(),
            "Analyzer ready"
        );

        Ok(Self::builder()
            .github(github)
            .reconciler(reconciler)
            .issues_per_page(config.github.issues_per_page)
            .max_ai_issues(config.ai.max_ai_issues)
            .build())
    }

    /// Whether issue summaries may come from the completion service.
    #[must_use]
    pub fn ai_enabled(&self) -> bool {
        self.reconciler.has_ai()
    }

    /// Fetches and classifies a repository's open issues.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl` before any network call if `repo_url` is not a GitHub
    ///   repository URL
    /// - `NotFound`, `RateLimited`, `GitHub` or `Network` if any of the three
    ///   fetches fails; the first failure aborts the others
    ///
    /// Completion failures never surface here.
    #[instrument(skip(self))]
    pub async fn analyze(&self, repo_url: &str) -> crate::Result<AnalysisResponse> {
        let repo = parse_repo_url(repo_url)?;
        self.analyze_repo(&repo).await
    }

    /// Like [`Analyzer::analyze`] for an already parsed reference.
    ///
    /// # Errors
    ///
    /// Same as [`Analyzer::analyze`], minus URL validation.
    #[instrument(skip(self), fields(repo = %repo))]
    pub async fn analyze_repo(&self, repo: &RepoRef) -> crate::Result<AnalysisResponse> {
        info!("Analyzing repository");

        let (metadata, mut issues, readme) = tokio::try_join!(
            self.github.fetch_repo(repo),
            self.github.fetch_open_issues(repo, self.issues_per_page),
            self.github.fetch_readme(repo),
        )?;

        let split = issues.len().min(self.max_ai_issues);
        let remaining = issues.split_off(split);
        debug!(
            reconciled = issues.len(),
            heuristic = remaining.len(),
            "Classifying issues"
        );

        let reconciled = join_all(
            issues
                .iter()
                .map(|issue| self.reconciler.reconcile(issue)),
        )
        .await;

        let mut enriched = Vec::with_capacity(issues.len() + remaining.len());
        enriched.extend(
            issues
                .into_iter()
                .zip(reconciled)
                .map(|(issue, result)| EnrichedIssue::new(issue, result.classification, result.ai)),
        );
        enriched.extend(remaining.into_iter().map(|issue| {
            let classification = classify(&issue);
            EnrichedIssue::new(issue, classification, false)
        }));

        let ai_count = enriched.iter().filter(|issue| issue.ai).count();
        info!(issues = enriched.len(), ai_count, "Analysis complete");

        Ok(AnalysisResponse {
            repo_data: build_snapshot(metadata, readme),
            issues: enriched,
        })
    }
}
