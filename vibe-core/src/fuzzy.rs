//! Subsequence search used to narrow the repository list.
//!
//! "Fuzzy" here means every character of the search term appears in the
//! target in the same order, with anything allowed in between. Matching is a
//! single greedy left-to-right scan; taking the earliest possible position for
//! each character never rules out a match that exists.

/// Case-folds a string for matching.
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Folds and trims a user-entered search term.
pub fn normalize_term(term: &str) -> String {
    fold(term.trim())
}

/// Whether `search` is a subsequence of `target`, ignoring case.
pub fn fuzzy_match(search: &str, target: &str) -> bool {
    is_subsequence(&fold(search), &fold(target))
}

/// Whether `search` is a subsequence of `target`. Both are expected to be
/// folded already.
pub fn is_subsequence(search: &str, target: &str) -> bool {
    let mut pending = search.chars().peekable();

    for current in target.chars() {
        match pending.peek() {
            Some(expected) if *expected == current => {
                pending.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    pending.peek().is_none()
}
