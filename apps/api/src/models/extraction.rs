use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Body of a stack-inference request.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub job_description: String,
}

impl ExtractionRequest {
    /// Validates an untyped JSON payload. A missing field, a non-string value,
    /// or a blank string are all `InvalidInput`.
    pub fn from_payload(payload: &Value) -> Result<Self, AppError> {
        match payload.get("jobDescription").and_then(Value::as_str) {
            Some(text) if !text.trim().is_empty() => Ok(Self {
                job_description: text.to_string(),
            }),
            _ => Err(AppError::InvalidInput),
        }
    }
}

/// Outcome of a stack inference, success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub stack: Vec<String>,
    pub ai_used: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    pub fn success(stack: Vec<String>) -> Self {
        Self {
            stack,
            ai_used: true,
            error: None,
        }
    }

    pub fn failure(code: &str) -> Self {
        Self {
            stack: Vec::new(),
            ai_used: false,
            error: Some(code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_payload_accepts_string() {
        let req = ExtractionRequest::from_payload(&json!({"jobDescription": "Rust role"})).unwrap();
        assert_eq!(req.job_description, "Rust role");
    }

    #[test]
    fn test_from_payload_rejects_invalid_shapes() {
        let cases = [
            json!({}),
            json!(null),
            json!({"jobDescription": ""}),
            json!({"jobDescription": "   \n"}),
            json!({"jobDescription": 42}),
            json!({"jobDescription": ["React"]}),
            json!({"jobDescription": null}),
            json!({"job_description": "snake case is not accepted"}),
        ];
        for payload in cases {
            assert!(
                matches!(
                    ExtractionRequest::from_payload(&payload),
                    Err(AppError::InvalidInput)
                ),
                "expected InvalidInput for {payload}"
            );
        }
    }

    #[test]
    fn test_success_serializes_without_error_field() {
        let value = serde_json::to_value(ExtractionResult::success(vec!["React".into()])).unwrap();
        assert_eq!(value, json!({"stack": ["React"], "aiUsed": true}));
    }

    #[test]
    fn test_failure_serializes_wire_shape() {
        let value = serde_json::to_value(ExtractionResult::failure("ai_inference_failed")).unwrap();
        assert_eq!(
            value,
            json!({"stack": [], "aiUsed": false, "error": "ai_inference_failed"})
        );
    }
}
