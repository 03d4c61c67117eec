//! Path parameter validation for snippet routes.

/// Parse a `{id}` path segment as a positive snippet id.
///
/// Accepts an optional leading `+` like a signed integer parse, rejects zero,
/// negatives, and anything non-numeric.
///
/// # Returns
/// `Some(id)` for ids of at least 1, otherwise `None`.
pub fn parse_snippet_id(segment: &str) -> Option<u64> {
    segment.parse::<u64>().ok().filter(|id| *id >= 1)
}
