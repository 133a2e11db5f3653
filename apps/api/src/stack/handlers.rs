//! Axum route handler for stack inference.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::models::extraction::ExtractionResult;
use crate::state::AppState;

/// POST /api/infer-stack
///
/// Body: `{ "jobDescription": string }`. A body that is not JSON is handled
/// like a missing field so the client always gets the documented 400 shape.
pub async fn handle_infer_stack(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ExtractionResult>, AppError> {
    let payload = match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!("Unreadable request body: {rejection}");
            Value::Null
        }
    };

    let result = state.extractor.extract(&payload).await?;
    Ok(Json(result))
}
