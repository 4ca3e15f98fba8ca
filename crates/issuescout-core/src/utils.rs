// SPDX-License-Identifier: Apache-2.0

//! Text utility functions.
//!
//! Lengths are counted in characters, never bytes, so multi-byte UTF-8
//! input is never split.

/// Ellipsis appended to truncated summaries.
pub const ELLIPSIS: &str = "...";

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Keeps the first `max_chars` characters and appends `suffix` if anything was cut.
///
/// Unlike a display-width truncation, the suffix is *not* counted against
/// `max_chars`.
///
/// # Examples
///
/// ```
/// use issuescout_core::utils::truncate_with_suffix;
///
/// assert_eq!(truncate_with_suffix("abcdef", 3, " [more]"), "abc [more]");
/// assert_eq!(truncate_with_suffix("abc", 3, " [more]"), "abc");
/// ```
#[must_use]
pub fn truncate_with_suffix(text: &str, max_chars: usize, suffix: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{suffix}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Truncates with the default `"..."` suffix.
///
/// # Examples
///
/// ```
/// use issuescout_core::utils::truncate;
///
/// assert_eq!(truncate("Hello", 10), "Hello");
///
/// let long = "x".repeat(250);
/// let result = truncate(&long, 200);
/// assert_eq!(result.chars().count(), 203);
/// assert!(result.ends_with("..."));
/// ```
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    truncate_with_suffix(text, max_chars, ELLIPSIS)
}
