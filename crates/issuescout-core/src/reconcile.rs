// SPDX-License-Identifier: Apache-2.0

//! Merges a model completion with the heuristic classification.
//!
//! The model only ever contributes the summary and, when it names one, the
//! duration. Difficulty and path hints always come from [`classify`]. Any
//! failure on the completion path downgrades the issue to the heuristic
//! result with provenance `false`; it is never surfaced to the caller.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::SecretString;
use tracing::{debug, instrument, warn};

use crate::ai::{AiClient, AiProvider};
use crate::classify::{SUMMARY_MAX_CHARS, classify};
use crate::config::AiConfig;
use crate::types::{ClassificationResult, EstimatedTime, RawIssue};
use crate::utils::truncate;

/// A duration phrase such as "2 hours", "1-3 hours", "3+ hours" or "<1 hour".
static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+\s*-?\s*[0-9]*\+?\s*hours?|<\s*[0-9]+\s*hour)")
        .expect("duration pattern is valid")
});

/// Boilerplate some models put in front of the summary.
static PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^here is a summary[^:]*:\s*").expect("preamble pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Classification plus the provenance flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// The merged classification.
    pub classification: ClassificationResult,
    /// True when the summary came from a successful completion.
    pub ai: bool,
}

/// Folds model text into a heuristic classification.
///
/// Pure: no I/O. An empty summary after cleanup keeps the heuristic summary.
///
/// # Examples
///
/// ```
/// use issuescout_core::classify::classify;
/// use issuescout_core::reconcile::merge_completion;
/// use issuescout_core::RawIssue;
///
/// let issue = RawIssue::builder().id(1).number(1).title("Fix typo").build();
/// let merged = merge_completion("Correct the typo. 1-2 hours", classify(&issue));
/// assert_eq!(merged.summary, "Correct the typo.");
/// assert_eq!(merged.estimated_time.as_str(), "1-2 hours");
/// ```
#[must_use]
pub fn merge_completion(content: &str, heuristic: ClassificationResult) -> ClassificationResult {
    let (text, estimated_time) = match DURATION.find(content) {
        Some(found) => {
            let time = WHITESPACE.replace_all(found.as_str(), " ").trim().to_string();
            let mut remainder = String::with_capacity(content.len());
            remainder.push_str(&content[..found.start()]);
            remainder.push_str(&content[found.end()..]);
            let remainder = WHITESPACE.replace(&remainder, " ").trim().to_string();
            (remainder, EstimatedTime::Extracted(time))
        }
        None => (content.to_string(), heuristic.estimated_time.clone()),
    };

    let summary = PREAMBLE.replace(&text, "").trim().to_string();
    let summary = if summary.is_empty() {
        heuristic.summary
    } else {
        truncate(&summary, SUMMARY_MAX_CHARS)
    };

    ClassificationResult {
        summary,
        difficulty: heuristic.difficulty,
        suggested_files: heuristic.suggested_files,
        estimated_time,
    }
}

/// Produces classifications, asking the completion service when one is
/// configured.
#[derive(Debug, Default)]
pub struct Reconciler {
    client: Option<AiClient>,
}

impl Reconciler {
    /// Builds a reconciler. Without a key every issue takes the heuristic path.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: Option<SecretString>, config: &AiConfig) -> anyhow::Result<Self> {
        let client = api_key
            .map(|key| AiClient::with_api_key(key, config))
            .transpose()?;
        if client.is_none() {
            debug!("No completion key configured, summaries are heuristic only");
        }
        Ok(Self { client })
    }

    /// Whether a completion client is configured.
    #[must_use]
    pub fn has_ai(&self) -> bool {
        self.client.is_some()
    }

    /// Classifies `issue`, merging in a model summary when possible.
    #[instrument(skip(self, issue), fields(issue_number = issue.number))]
    pub async fn reconcile(&self, issue: &RawIssue) -> Reconciled {
        let heuristic = classify(issue);

        let Some(client) = &self.client else {
            return Reconciled {
                classification: heuristic,
                ai: false,
            };
        };

        match client.summarize_issue(issue).await {
            Ok(content) => Reconciled {
                classification: merge_completion(&content, heuristic),
                ai: true,
            },
            Err(err) => {
                warn!(error = %err, "Completion failed, using heuristic summary");
                Reconciled {
                    classification: heuristic,
                    ai: false,
                }
            }
        }
    }
}
