//! Normalization helpers shared by the entry operations.

/// Trim leading/trailing whitespace and return `None` if nothing is left.
pub(crate) fn non_empty_trimmed(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

/// Case folding used for every case-insensitive comparison.
pub(crate) fn fold(s: &str) -> String {
    s.to_lowercase()
}

pub(crate) fn eq_folded(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

/// Whether `haystack` contains `needle_folded` (already folded) ignoring case.
pub(crate) fn contains_folded(haystack: &str, needle_folded: &str) -> bool {
    fold(haystack).contains(needle_folded)
}
