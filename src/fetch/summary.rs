//! Summary extraction for the related-information panel
//!
//! Knowledge API extracts arrive as HTML fragments. They are reduced to
//! plain text and cut down to a short, sentence-aligned summary.

/// Shown when no article or no extract exists for the text
pub const NOT_FOUND_TEXT: &str = "No related information found.";

/// Shown when the lookup itself failed
pub const FAILURE_TEXT: &str = "Failed to fetch related information.";

/// Appended when a long extract has no sentence end to cut at
pub const TRUNCATION_MARKER: &str = "...";

/// Replace every `<...>` tag with a single space
///
/// A `<` without a closing `>`, or an empty `<>`, is kept as text.
pub fn strip_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        match after.find('>') {
            Some(end) if end > 0 => {
                out.push_str(&rest[..start]);
                out.push(' ');
                rest = &after[end + 1..];
            }
            _ => {
                out.push_str(&rest[..=start]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduce an extract to at most `max_words` words
///
/// When the extract is longer than the limit, the kept words are cut after
/// their last `.`; with no `.` in them, [`TRUNCATION_MARKER`] is appended.
/// Returns `None` when nothing readable is left.
pub fn summarize(extract: &str, max_words: usize) -> Option<String> {
    let clean = collapse_whitespace(&strip_markup(extract));
    let words: Vec<&str> = clean.split(' ').filter(|w| !w.is_empty()).collect();

    let mut summary = words
        .iter()
        .take(max_words)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if words.len() > max_words {
        match summary.rfind('.') {
            Some(idx) => summary.truncate(idx + 1),
            None => summary.push_str(TRUNCATION_MARKER),
        }
    }

    if summary.is_empty() {
        None
    } else {
        Some(summary)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
