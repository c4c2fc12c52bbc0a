//! String helpers used by validators and error heuristics

/// True for empty or whitespace-only input
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Case-insensitive check for any of the given (lowercase) needles
pub fn contains_any_ci(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle))
}
