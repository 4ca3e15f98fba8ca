// SPDX-License-Identifier: Apache-2.0

//! Domain and wire types.
//!
//! Inbound types (`RawIssue`, `Label`, `Assignee`, `RepoMetadata`) mirror the
//! GitHub REST payloads. Outbound types (`EnrichedIssue`, `RepositorySnapshot`,
//! `AnalysisResponse`) use the camelCase field names the web frontend reads.

use std::fmt;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes `null` or a missing array as an empty `Vec`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An issue label as returned by GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label ID.
    pub id: u64,
    /// Label name (e.g., "good first issue").
    pub name: String,
    /// Six hex digits, no leading `#`.
    pub color: String,
    /// Optional label description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A user assigned to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// GitHub login.
    pub login: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Profile URL.
    pub html_url: String,
}

/// An open issue exactly as fetched from GitHub. Never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct RawIssue {
    /// Global issue ID.
    pub id: u64,
    /// Repository-local issue number.
    pub number: u64,
    /// Issue title.
    #[builder(into)]
    pub title: String,
    /// Markdown body, `None` when the author left it empty.
    #[builder(into)]
    pub body: Option<String>,
    /// Browser URL of the issue.
    #[builder(into, default)]
    pub html_url: String,
    /// Issue state ("open").
    #[builder(into, default = "open".to_string())]
    pub state: String,
    /// Labels in the order GitHub returns them.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[builder(default)]
    pub labels: Vec<Label>,
    /// Creation timestamp.
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[builder(default = Utc::now())]
    pub updated_at: DateTime<Utc>,
    /// Assigned users.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[builder(default)]
    pub assignees: Vec<Assignee>,
}

impl RawIssue {
    /// Body text, or the empty string when absent.
    #[must_use]
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Repository metadata from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoMetadata {
    /// Repository name.
    pub name: String,
    /// Repository description.
    #[serde(default)]
    pub description: Option<String>,
    /// Browser URL.
    pub html_url: String,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u64,
    /// Primary language as detected by GitHub.
    #[serde(default)]
    pub language: Option<String>,
}

/// Coarse contribution-effort bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for a first contribution.
    Easy,
    /// Needs some familiarity with the project.
    Medium,
    /// Touches core behaviour or needs deep knowledge.
    Hard,
}

impl Difficulty {
    /// Returns the lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of heuristic time estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBucket {
    /// `<1 hour`
    #[serde(rename = "<1 hour")]
    UnderOneHour,
    /// `1–2 hours`
    #[serde(rename = "1–2 hours")]
    OneToTwoHours,
    /// `1–3 hours`
    #[serde(rename = "1–3 hours")]
    OneToThreeHours,
    /// `3–6 hours`
    #[serde(rename = "3–6 hours")]
    ThreeToSixHours,
    /// `6+ hours`
    #[serde(rename = "6+ hours")]
    SixPlusHours,
}

impl TimeBucket {
    /// All buckets, shortest first.
    pub const ALL: [TimeBucket; 5] = [
        TimeBucket::UnderOneHour,
        TimeBucket::OneToTwoHours,
        TimeBucket::OneToThreeHours,
        TimeBucket::ThreeToSixHours,
        TimeBucket::SixPlusHours,
    ];

    /// Returns the display literal (en-dash ranges).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBucket::UnderOneHour => "<1 hour",
            TimeBucket::OneToTwoHours => "1–2 hours",
            TimeBucket::OneToThreeHours => "1–3 hours",
            TimeBucket::ThreeToSixHours => "3–6 hours",
            TimeBucket::SixPlusHours => "6+ hours",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated effort attached to an issue.
///
/// The heuristic path always yields a [`TimeBucket`]; the AI path may carry
/// the duration phrase quoted from the completion instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EstimatedTime {
    /// One of the five heuristic buckets.
    Bucket(TimeBucket),
    /// Duration text extracted from a model completion (e.g. "2-3 hours").
    Extracted(String),
}

impl EstimatedTime {
    /// Returns the text shown to users.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            EstimatedTime::Bucket(bucket) => bucket.as_str(),
            EstimatedTime::Extracted(text) => text,
        }
    }
}

impl From<TimeBucket> for EstimatedTime {
    fn from(bucket: TimeBucket) -> Self {
        EstimatedTime::Bucket(bucket)
    }
}

impl fmt::Display for EstimatedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-issue classification output. Produced fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Contributor-facing summary, at most 200 characters plus an ellipsis.
    pub summary: String,
    /// Difficulty bucket.
    pub difficulty: Difficulty,
    /// Up to three path hints, in trigger-scan order.
    pub suggested_files: Vec<String>,
    /// Time estimate.
    pub estimated_time: EstimatedTime,
}

/// An issue as returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedIssue {
    /// Global issue ID.
    pub id: u64,
    /// Repository-local issue number.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Raw issue body.
    pub body: Option<String>,
    /// Browser URL of the issue.
    pub url: String,
    /// Issue state.
    pub state: String,
    /// Labels in GitHub order.
    pub labels: Vec<Label>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Assigned users.
    pub assignees: Vec<Assignee>,
    /// Summary, difficulty, file hints and estimate.
    #[serde(flatten)]
    pub classification: ClassificationResult,
    /// True when summary/estimate came from the completion service.
    pub ai: bool,
}

impl EnrichedIssue {
    /// Combines a fetched issue with its classification and provenance flag.
    #[must_use]
    pub fn new(issue: RawIssue, classification: ClassificationResult, ai: bool) -> Self {
        Self {
            id: issue.id,
            number: issue.number,
            title: issue.title,
            body: issue.body,
            url: issue.html_url,
            state: issue.state,
            labels: issue.labels,
            created_at: issue.created_at,
            updated_at: issue.updated_at,
            assignees: issue.assignees,
            classification,
            ai,
        }
    }
}

/// Repository summary returned alongside the issues.
///
/// `contributing_excerpt`, when present, is always a substring of `raw_readme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    /// Repository name.
    pub name: String,
    /// Description, or "No description available".
    pub description: String,
    /// Browser URL.
    pub url: String,
    /// Star count.
    #[serde(rename = "stars")]
    pub star_count: u64,
    /// Primary language, or "Unknown".
    #[serde(rename = "language")]
    pub primary_language: String,
    /// Raw README text.
    #[serde(rename = "readme", default, skip_serializing_if = "Option::is_none")]
    pub raw_readme: Option<String>,
    /// The README's "Contributing" section.
    #[serde(
        rename = "contributingGuide",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub contributing_excerpt: Option<String>,
}

/// Successful analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Repository summary.
    pub repo_data: RepositorySnapshot,
    /// AI-reconciled issues first, then heuristic-only issues.
    pub issues: Vec<EnrichedIssue>,
}
