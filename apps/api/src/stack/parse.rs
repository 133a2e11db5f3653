//! Turns untrusted provider text into a raw candidate list. Never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::llm_client::strip_json_fences;

/// First `[` through the last `]`, across newlines.
static BRACKETED_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

/// Result of parsing provider output.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCandidates {
    Array(Vec<String>),
    Empty,
}

/// Strict JSON first, then the first bracketed substring, otherwise `Empty`.
/// A value that parses but is not an array is also `Empty`.
pub fn parse_candidates(text: &str) -> ParsedCandidates {
    let strict = serde_json::from_str::<Value>(strip_json_fences(text)).ok();

    let value = strict.or_else(|| {
        let bracketed = BRACKETED_ARRAY.find(text)?;
        debug!("Strict JSON parse failed; trying bracketed substring");
        serde_json::from_str::<Value>(bracketed.as_str()).ok()
    });

    match value {
        Some(Value::Array(items)) => {
            ParsedCandidates::Array(items.iter().filter_map(candidate_text).collect())
        }
        Some(_) => {
            debug!("Provider output parsed but is not an array");
            ParsedCandidates::Empty
        }
        None => {
            debug!("Provider output contained no parsable array");
            ParsedCandidates::Empty
        }
    }
}

/// Strings pass through, scalars are stringified, everything else is skipped.
fn candidate_text(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
