//! Axum route handler for resume / job-description match analysis.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::jd_summary::summarize_job_description;
use crate::analysis::pdf_text::extract_resume_text;
use crate::analysis::prompts::build_match_messages;
use crate::analysis::{truncate_chars, MAX_CHAR_LIMIT};
use crate::errors::AppError;
use crate::state::AppState;

pub const MISSING_INPUT_MESSAGE: &str = "Missing resume or job_description";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Absent and `null` fields are treated as empty.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Data-URI base64 PDF: `<header>,<base64>`.
    pub resume: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub insights: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Extracts the resume text, trims both inputs, and returns the model's match
/// feedback. An unreadable resume is forwarded as a failure marker unless
/// strict extraction is configured.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    let resume_payload = request.resume.unwrap_or_default();
    let jd_raw = request.job_description.unwrap_or_default();

    if resume_payload.is_empty() || jd_raw.is_empty() {
        return Err(missing_input());
    }

    debug!(
        "Analyze request: resume payload {} bytes, job description {} bytes",
        resume_payload.len(),
        jd_raw.len()
    );

    // PDF parsing is CPU-bound; keep it off the async executor.
    let extracted = tokio::task::spawn_blocking(move || extract_resume_text(&resume_payload))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })?;

    let resume_raw = match extracted {
        Ok(text) => text,
        Err(e) if state.config.strict_resume_extraction => return Err(e.into()),
        Err(e) => {
            warn!("Resume extraction failed, forwarding placeholder: {e}");
            e.placeholder()
        }
    };

    if resume_raw.is_empty() {
        return Err(missing_input());
    }

    let resume = truncate_chars(&resume_raw, MAX_CHAR_LIMIT);
    let jd = summarize_job_description(&jd_raw);

    debug!(
        "Prompt inputs: resume {} chars, job description {} chars",
        resume.chars().count(),
        jd.chars().count()
    );

    let messages = build_match_messages(resume, &jd);
    let insights = state.completions.complete(&messages).await?;

    Ok(Json(AnalyzeResponse { insights }))
}

fn missing_input() -> AppError {
    AppError::Validation(MISSING_INPUT_MESSAGE.to_string())
}
