// SPDX-License-Identifier: Apache-2.0

//! Deterministic keyword classifier.
//!
//! Maps an issue's title, body and labels to a difficulty bucket, a short
//! summary, a handful of path hints and a time estimate. Total and pure: the
//! same issue always classifies the same way and nothing here can fail.
//!
//! Precedence is fixed: easy signals (labels, then text) are checked before
//! hard signals (labels, then text), so a "good first issue" label wins over
//! a body that mentions a bug.

use crate::estimate::estimate_issue;
use crate::types::{ClassificationResult, Difficulty, RawIssue};
use crate::utils::{char_len, truncate};

/// Maximum summary length before truncation.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Maximum number of suggested path hints.
pub const MAX_SUGGESTED_FILES: usize = 3;

/// Summary used when an issue has no body.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Label substrings that mark an issue as easy.
const EASY_LABELS: &[&str] = &["good first issue", "beginner", "easy", "help wanted"];

/// Label substrings that mark an issue as hard.
const HARD_LABELS: &[&str] = &["bug", "enhancement", "feature", "core"];

/// Title/body keywords that mark an issue as easy.
const EASY_KEYWORDS: &[&str] = &[
    "typo",
    "documentation",
    "readme",
    "comment",
    "formatting",
    "style",
    "lint",
    "spelling",
];

/// Title/body keywords that mark an issue as hard.
const HARD_KEYWORDS: &[&str] = &[
    "bug",
    "fix",
    "refactor",
    "performance",
    "optimization",
    "security",
    "core",
    "architecture",
];

/// A path-hint rule: if any trigger occurs in the text, the hints are appended.
struct FileRule {
    triggers: &'static [&'static str],
    hints: &'static [&'static str],
}

/// Path-hint rules in scan order.
const FILE_RULES: &[FileRule] = &[
    FileRule {
        triggers: &["readme", "documentation"],
        hints: &["README.md", "docs/"],
    },
    FileRule {
        triggers: &["test", "spec"],
        hints: &["test/", "__tests__/", "*.test.js", "*.spec.js"],
    },
    FileRule {
        triggers: &["component", "ui"],
        hints: &["components/", "src/components/"],
    },
    FileRule {
        triggers: &["api", "endpoint"],
        hints: &["api/", "routes/", "controllers/"],
    },
    FileRule {
        triggers: &["config", "setting"],
        hints: &["config/", "*.config.js", "package.json"],
    },
];

/// Lowercased `title + " " + body`.
fn haystack(issue: &RawIssue) -> String {
    format!("{} {}", issue.title, issue.body_text()).to_lowercase()
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

fn any_label_contains(labels: &[String], needles: &[&str]) -> bool {
    labels.iter().any(|label| contains_any(label, needles))
}

/// Determines the difficulty bucket from lowercased text and label names.
#[must_use]
pub fn difficulty(haystack: &str, label_names: &[String]) -> Difficulty {
    if any_label_contains(label_names, EASY_LABELS) || contains_any(haystack, EASY_KEYWORDS) {
        Difficulty::Easy
    } else if any_label_contains(label_names, HARD_LABELS)
        || contains_any(haystack, HARD_KEYWORDS)
    {
        Difficulty::Hard
    } else {
        Difficulty::Medium
    }
}

/// Summarizes a body: verbatim up to 200 characters, truncated beyond that.
#[must_use]
pub fn summarize_body(body: Option<&str>) -> String {
    match body {
        Some(body) if char_len(body) > SUMMARY_MAX_CHARS => truncate(body, SUMMARY_MAX_CHARS),
        Some(body) if !body.is_empty() => body.to_string(),
        _ => NO_DESCRIPTION.to_string(),
    }
}

/// Collects path hints for every matching rule, keeping only the first three.
#[must_use]
pub fn suggest_files(haystack: &str) -> Vec<String> {
    FILE_RULES
        .iter()
        .filter(|rule| contains_any(haystack, rule.triggers))
        .flat_map(|rule| rule.hints.iter())
        .take(MAX_SUGGESTED_FILES)
        .map(|hint| (*hint).to_string())
        .collect()
}

/// Classifies an issue without any network access.
///
/// # Examples
///
/// ```
/// use issuescout_core::classify::classify;
/// use issuescout_core::{Difficulty, RawIssue};
///
/// let issue = RawIssue::builder()
///     .id(1)
///     .number(1)
///     .title("Refactor the scheduler")
///     .build();
/// let result = classify(&issue);
/// assert_eq!(result.difficulty, Difficulty::Hard);
/// assert_eq!(result.summary, "No description provided.");
/// ```
#[must_use]
pub fn classify(issue: &RawIssue) -> ClassificationResult {
    let text = haystack(issue);
    let label_names: Vec<String> = issue
        .labels
        .iter()
        .map(|label| label.name.to_lowercase())
        .collect();

    let difficulty = difficulty(&text, &label_names);

    ClassificationResult {
        summary: summarize_body(issue.body.as_deref()),
        difficulty,
        suggested_files: suggest_files(&text),
        estimated_time: estimate_issue(issue, difficulty).into(),
    }
}
