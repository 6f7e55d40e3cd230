//! JD Summarizer — keeps the parts of a job description most likely to matter.
//!
//! For each keyword in `RELEVANCE_WINDOWS` (checked in table order), the window
//! starting at its first case-insensitive occurrence is kept. Windows are joined
//! with a blank line, in table order, even if they overlap. With no keyword hit,
//! the first `MAX_CHAR_LIMIT` characters are returned instead.
//!
//! All lengths are in characters, not bytes.

use crate::analysis::{truncate_chars, MAX_CHAR_LIMIT};

/// (keyword, window length in characters), in output order.
pub const RELEVANCE_WINDOWS: &[(&str, usize)] = &[
    ("responsibilities", 3000),
    ("requirements", 3000),
    ("summary", 2000),
];

const WINDOW_SEPARATOR: &str = "\n\n";

pub fn summarize_job_description(jd_text: &str) -> String {
    let windows: Vec<&str> = RELEVANCE_WINDOWS
        .iter()
        .filter_map(|&(keyword, size)| {
            find_ignore_ascii_case(jd_text, keyword)
                .map(|start| truncate_chars(&jd_text[start..], size))
        })
        .collect();

    if windows.is_empty() {
        truncate_chars(jd_text, MAX_CHAR_LIMIT).to_string()
    } else {
        windows.join(WINDOW_SEPARATOR)
    }
}

/// Byte offset of the first occurrence of an ASCII `needle`, ignoring case.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.char_indices().map(|(i, _)| i).find(|&i| {
        haystack
            .get(i..i + needle.len())
            .is_some_and(|s| s.eq_ignore_ascii_case(needle))
    })
}
