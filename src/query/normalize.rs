/// Lower-case text for search and enrichment requests
///
/// Whitespace is left untouched so a trailing space while typing is still
/// part of the prefix.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}

/// Trim and lower-case text for add requests
pub fn normalize_submission(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive equality used when removing deleted words
pub fn same_word(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
