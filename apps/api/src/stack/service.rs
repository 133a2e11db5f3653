//! Stack inference pipeline: validate → provider call → parse → normalize.
//!
//! Stateless apart from the injected provider and limits, so one instance is
//! shared across all requests behind an `Arc`. Every failure is terminal:
//! there is no retry and no heuristic fallback when the provider is missing.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{ChatProvider, ChatRequest};
use crate::models::extraction::{ExtractionRequest, ExtractionResult};
use crate::stack::normalize::{normalize_stack, StackLimits};
use crate::stack::parse::{parse_candidates, ParsedCandidates};
use crate::stack::prompts::{
    stack_system_prompt, stack_user_prompt, STACK_MAX_OUTPUT_TOKENS, STACK_TEMPERATURE,
};

pub struct StackExtractionService {
    provider: Option<Arc<dyn ChatProvider>>,
    limits: StackLimits,
}

impl StackExtractionService {
    /// `provider: None` means no credential was configured.
    pub fn new(provider: Option<Arc<dyn ChatProvider>>, limits: StackLimits) -> Self {
        Self { provider, limits }
    }

    pub fn ai_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Runs the pipeline on an untyped request body.
    pub async fn extract(&self, payload: &Value) -> Result<ExtractionResult, AppError> {
        let request = ExtractionRequest::from_payload(payload)?;
        self.extract_text(&request.job_description).await
    }

    /// Runs the pipeline on a job description string.
    pub async fn extract_text(&self, job_description: &str) -> Result<ExtractionResult, AppError> {
        if job_description.trim().is_empty() {
            return Err(AppError::InvalidInput);
        }

        let provider = self
            .provider
            .as_deref()
            .ok_or(AppError::ProviderUnavailable)?;

        let system = stack_system_prompt();
        let user = stack_user_prompt(job_description);
        let text = provider
            .chat_complete(ChatRequest {
                system: &system,
                user: &user,
                temperature: STACK_TEMPERATURE,
                max_output_tokens: STACK_MAX_OUTPUT_TOKENS,
            })
            .await?;

        let raw = match parse_candidates(&text) {
            ParsedCandidates::Array(items) => items,
            ParsedCandidates::Empty => {
                warn!(
                    response_chars = text.chars().count(),
                    "LLM response held no usable array; returning empty stack"
                );
                Vec::new()
            }
        };

        let stack = normalize_stack(&raw, &self.limits);
        info!(
            model = provider.model(),
            raw_candidates = raw.len(),
            stack_size = stack.len(),
            "Stack inference complete"
        );

        Ok(ExtractionResult::success(stack))
    }
}
