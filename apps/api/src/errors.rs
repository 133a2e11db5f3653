use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::extraction::ExtractionResult;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is terminal: the response always carries `aiUsed: false`
/// and an empty `stack`, plus a fixed error code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("jobDescription is missing, empty, or not a string")]
    InvalidInput,

    #[error("LLM provider is not configured")]
    ProviderUnavailable,

    #[error("LLM call failed: {0}")]
    ProviderCallFailed(#[from] LlmError),
}

impl AppError {
    /// Fixed wire code. Never includes the underlying cause.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput => "jobDescription_required",
            AppError::ProviderUnavailable => "ai_unavailable_missing_api_key",
            AppError::ProviderCallFailed(_) => "ai_inference_failed",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::ProviderUnavailable | AppError::ProviderCallFailed(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidInput => tracing::debug!("Rejected request: {self}"),
            AppError::ProviderUnavailable => {
                tracing::warn!("Stack inference requested but OPENAI_API_KEY is not set")
            }
            AppError::ProviderCallFailed(e) => tracing::error!("LLM error: {e}"),
        }

        let body = Json(ExtractionResult::failure(self.code()));
        (self.status(), body).into_response()
    }
}
