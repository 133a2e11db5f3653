use std::str::FromStr;

use anyhow::{Context, Result};

use crate::stack::normalize::StackLimits;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider credential. `None` keeps the service up but every extraction
    /// reports `ai_unavailable_missing_api_key`.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub llm_timeout_secs: u64,
    pub stack_limits: StackLimits,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = StackLimits::default();

        Ok(Config {
            openai_api_key: get("OPENAI_API_KEY").map(|k| k.trim().to_string()),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_timeout_secs: parse_or("LLM_TIMEOUT_SECS", get("LLM_TIMEOUT_SECS"), 30)?,
            stack_limits: StackLimits {
                max_items: parse_or("STACK_MAX_ITEMS", get("STACK_MAX_ITEMS"), defaults.max_items)?,
                max_name_chars: parse_or(
                    "STACK_MAX_NAME_CHARS",
                    get("STACK_MAX_NAME_CHARS"),
                    defaults.max_name_chars,
                )?,
            },
            port: parse_or("PORT", get("PORT"), 8080)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {value}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = config_from(&[]).unwrap();
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_model, DEFAULT_MODEL);
        assert_eq!(config.openai_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.llm_timeout_secs, 30);
        assert_eq!(config.stack_limits.max_items, 20);
        assert_eq!(config.stack_limits.max_name_chars, 64);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("OPENAI_API_KEY", "   ")]).unwrap();
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4.1-mini"),
            ("OPENAI_BASE_URL", "http://localhost:1234/v1/"),
            ("STACK_MAX_ITEMS", "5"),
            ("STACK_MAX_NAME_CHARS", "32"),
            ("PORT", "3000"),
        ])
        .unwrap();
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_model, "gpt-4.1-mini");
        assert_eq!(config.openai_base_url, "http://localhost:1234/v1");
        assert_eq!(config.stack_limits.max_items, 5);
        assert_eq!(config.stack_limits.max_name_chars, 32);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_malformed_number_fails() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
