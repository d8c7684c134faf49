/// Whether `term` occurs in `lower` as a whole word, allowing a plural `s`.
///
/// `lower` must already be lower-cased. "card" matches "cards" but not
/// "discard" or "cardinal".
pub(crate) fn contains_term(lower: &str, term: &str) -> bool {
    lower.match_indices(term).any(|(start, matched)| {
        let before_ok = lower[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());

        let mut after = lower[start + matched.len()..].chars();
        let after_ok = match after.next() {
            None => true,
            Some('s') => after.next().map_or(true, |c| !c.is_alphanumeric()),
            Some(c) => !c.is_alphanumeric(),
        };

        before_ok && after_ok
    })
}

/// Whether any of `terms` occurs as a whole word.
pub(crate) fn contains_any(lower: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| contains_term(lower, t))
}
