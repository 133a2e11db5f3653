use std::sync::Arc;

use crate::stack::service::StackExtractionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the optional LLM provider; `None` when OPENAI_API_KEY is unset.
    pub extractor: Arc<StackExtractionService>,
}
