//! Resume text extraction from a data-URI style base64 PDF (`<header>,<base64>`).
//!
//! Failures are returned as `ExtractError`; `ExtractError::placeholder` renders
//! one as the inline marker text that can be forwarded to the model instead.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use lopdf::Document;
use thiserror::Error;
use tracing::debug;

/// Prefix of the inline marker produced for an unreadable resume.
pub const EXTRACTION_FAILURE_PREFIX: &str = "(Failed to extract text from resume:";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("payload has no ',' separating the data-URI header from the base64 data")]
    MissingSeparator,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF has no pages")]
    NoPages,

    #[error("corrupt PDF: {0}")]
    Corrupt(String),
}

impl ExtractError {
    /// Inline text standing in for the resume when extraction fails.
    pub fn placeholder(&self) -> String {
        format!("{EXTRACTION_FAILURE_PREFIX} {self})")
    }
}

/// Decodes the payload and returns the text of every page, in page order,
/// joined by newlines. A page without extractable text contributes "".
pub fn extract_resume_text(payload: &str) -> Result<String, ExtractError> {
    let bytes = decode_data_uri(payload)?;

    // lopdf panics on some malformed object graphs instead of returning an error.
    std::panic::catch_unwind(|| extract_pdf_text(&bytes))
        .unwrap_or_else(|panic| Err(ExtractError::Corrupt(panic_message(panic.as_ref()))))
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(bytes)?;

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(ExtractError::NoPages);
    }

    let page_texts = pages
        .keys()
        .map(|&page_number| match doc.extract_text(&[page_number]) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("Page {page_number} has no extractable text: {e}");
                None
            }
        });

    Ok(join_pages(page_texts))
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "PDF parser panicked".to_string()
    }
}

/// Base64-decodes everything after the first comma.
fn decode_data_uri(payload: &str) -> Result<Vec<u8>, ExtractError> {
    let (_header, encoded) = payload
        .split_once(',')
        .ok_or(ExtractError::MissingSeparator)?;

    // Line-wrapped base64 is common in pasted payloads.
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    Ok(STANDARD.decode(compact)?)
}

fn join_pages(pages: impl IntoIterator<Item = Option<String>>) -> String {
    pages
        .into_iter()
        .map(|text| {
            text.map(|t| t.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
