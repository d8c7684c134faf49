//! One-sentence summary extraction.

use atelier_core::constants::{SUMMARY_MAX_CHARS, SUMMARY_MIN_FRAGMENT_CHARS};

/// Returned when no sentence is long enough.
pub const PLACEHOLDER_SUMMARY: &str =
    "A thoughtfully structured template distilled from proven interface patterns.";

const ELLIPSIS: &str = "...";

/// First sentence of at least 30 characters, cut to 150 characters,
/// followed by an ellipsis.
pub fn summarize(text: &str) -> String {
    text.split(['.', '!', '?'])
        .map(|fragment| fragment.split_whitespace().collect::<Vec<_>>().join(" "))
        .find(|fragment| fragment.chars().count() >= SUMMARY_MIN_FRAGMENT_CHARS)
        .map(|fragment| {
            let cut: String = fragment.chars().take(SUMMARY_MAX_CHARS).collect();
            format!("{}{ELLIPSIS}", cut.trim_end())
        })
        .unwrap_or_else(|| PLACEHOLDER_SUMMARY.to_string())
}
