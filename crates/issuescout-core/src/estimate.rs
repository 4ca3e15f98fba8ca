// SPDX-License-Identifier: Apache-2.0

//! Heuristic time estimation from difficulty and body length.

use crate::types::{Difficulty, RawIssue, TimeBucket};
use crate::utils::char_len;

/// Body length (characters) at which an easy issue moves to the longer bucket.
pub const EASY_THRESHOLD: usize = 300;

/// Body length at which a medium issue moves to the longer bucket.
pub const MEDIUM_THRESHOLD: usize = 500;

/// Body length at which a hard issue moves to the longer bucket.
pub const HARD_THRESHOLD: usize = 800;

/// Maps a body length and difficulty to a time bucket.
///
/// A body exactly at the threshold already counts as long.
///
/// # Examples
///
/// ```
/// use issuescout_core::estimate::estimate;
/// use issuescout_core::{Difficulty, TimeBucket};
///
/// assert_eq!(estimate(499, Difficulty::Medium), TimeBucket::OneToThreeHours);
/// assert_eq!(estimate(500, Difficulty::Medium), TimeBucket::ThreeToSixHours);
/// ```
#[must_use]
pub fn estimate(body_length: usize, difficulty: Difficulty) -> TimeBucket {
    match difficulty {
        Difficulty::Easy if body_length < EASY_THRESHOLD => TimeBucket::UnderOneHour,
        Difficulty::Easy => TimeBucket::OneToTwoHours,
        Difficulty::Medium if body_length < MEDIUM_THRESHOLD => TimeBucket::OneToThreeHours,
        Difficulty::Medium => TimeBucket::ThreeToSixHours,
        Difficulty::Hard if body_length < HARD_THRESHOLD => TimeBucket::ThreeToSixHours,
        Difficulty::Hard => TimeBucket::SixPlusHours,
    }
}

/// Estimates an issue using its body length (0 when the body is absent).
#[must_use]
pub fn estimate_issue(issue: &RawIssue, difficulty: Difficulty) -> TimeBucket {
    estimate(char_len(issue.body_text()), difficulty)
}
