// Resume / job-description match analysis.
// Input shaping (PDF text, JD windows, truncation) plus the POST /analyze handler.
// The completion call goes through llm_client::CompletionService only.

pub mod handlers;
pub mod jd_summary;
pub mod pdf_text;
pub mod prompts;

/// Character budget for the resume text and for the JD fallback prefix (~3k tokens).
pub const MAX_CHAR_LIMIT: usize = 12_000;

/// Returns at most the first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
