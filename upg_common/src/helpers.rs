/// Returns `None` for missing or whitespace-only values, so that optional configuration and request fields can be
/// treated uniformly.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
