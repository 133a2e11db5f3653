mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod stack;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{ChatProvider, OpenAiClient};
use crate::routes::build_router;
use crate::stack::service::StackExtractionService;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting stack inference API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM provider (optional: absence is reported per request, never masked)
    let provider = build_provider(&config)?;

    let extractor = StackExtractionService::new(provider, config.stack_limits);
    info!(
        "Stack limits: max_items={} max_name_chars={}",
        config.stack_limits.max_items, config.stack_limits.max_name_chars
    );

    let state = AppState {
        extractor: Arc::new(extractor),
    };

    // The dashboard calls this from the browser
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the OpenAI-compatible client when a key is configured.
fn build_provider(config: &Config) -> Result<Option<Arc<dyn ChatProvider>>> {
    let Some(api_key) = config.openai_api_key.clone() else {
        warn!("OPENAI_API_KEY is not set; stack inference will answer 503");
        return Ok(None);
    };

    let client = OpenAiClient::new(
        api_key,
        config.openai_model.clone(),
        config.openai_base_url.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!(
        "LLM client initialized (model: {}, base: {}, timeout: {}s)",
        config.openai_model, config.openai_base_url, config.llm_timeout_secs
    );

    let provider: Arc<dyn ChatProvider> = Arc::new(client);
    Ok(Some(provider))
}
