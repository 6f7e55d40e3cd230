use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `OpenAiClient` in production, a mock in tests.
    pub completions: Arc<dyn CompletionService>,
    pub config: Config,
}
