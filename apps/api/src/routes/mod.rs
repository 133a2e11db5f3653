pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::stack::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stack inference; other methods get 405 with `Allow: POST`
        .route("/api/infer-stack", post(handlers::handle_infer_stack))
        .with_state(state)
}
