//! Environment-driven configuration for the chat binary.

use skillbridge_a2a::A2aConfig;
use skillbridge_agent::ModelConfig;
use skillbridge_core::{BridgeError, BridgeResult};
use std::time::Duration;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const SERVER_URL_VAR: &str = "A2A_SERVER_URL";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const API_BASE_URL_VAR: &str = "GEMINI_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "A2A_TIMEOUT_SECS";
pub const MAX_ROUNDS_VAR: &str = "MAX_TOOL_ROUNDS";
pub const MODEL_TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";

/// Everything the binary needs to start a session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub a2a: A2aConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> BridgeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. Only the API key is required.
    pub fn from_lookup<F>(lookup: F) -> BridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR)
            .ok_or_else(|| BridgeError::Config(format!("{API_KEY_VAR} is not set")))?;

        let mut model = ModelConfig::gemini(api_key);
        if let Some(model_id) = get(MODEL_VAR) {
            model.model_id = model_id;
        }
        model.api_base_url = get(API_BASE_URL_VAR);
        if let Some(raw) = get(MAX_ROUNDS_VAR) {
            model.max_tool_rounds = parse_positive(MAX_ROUNDS_VAR, &raw)?;
        }
        if let Some(raw) = get(MODEL_TIMEOUT_VAR) {
            model.request_timeout_secs = parse_positive(MODEL_TIMEOUT_VAR, &raw)?.into();
        }

        let mut a2a = match get(SERVER_URL_VAR) {
            Some(url) => A2aConfig::new(url),
            None => A2aConfig::default(),
        };
        if let Some(raw) = get(TIMEOUT_VAR) {
            a2a = a2a.with_timeout(Duration::from_secs(parse_positive(TIMEOUT_VAR, &raw)?.into()));
        }

        Ok(Self { model, a2a })
    }
}

fn parse_positive(key: &str, raw: &str) -> BridgeResult<u32> {
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(BridgeError::Config(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_only_api_key() {
        let config = AppConfig::from_lookup(lookup(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.model.api_key, "secret");
        assert_eq!(config.model.model_id, "gemini-2.0-flash");
        assert!(config.model.api_base_url.is_none());
        assert_eq!(config.model.max_tool_rounds, 10);
        assert_eq!(config.model.request_timeout_secs, 60);
        assert_eq!(config.a2a.base_url, "http://localhost:3000");
        assert_eq!(config.a2a.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_api_key() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, BridgeError::Config(ref m) if m.contains(API_KEY_VAR)));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let err = AppConfig::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (SERVER_URL_VAR, "http://agents.internal:8080/"),
            (MODEL_VAR, "gemini-1.5-pro"),
            (API_BASE_URL_VAR, "http://127.0.0.1:9999"),
            (TIMEOUT_VAR, "5"),
            (MAX_ROUNDS_VAR, "3"),
            (MODEL_TIMEOUT_VAR, "90"),
        ]))
        .unwrap();
        assert_eq!(config.a2a.base_url, "http://agents.internal:8080");
        assert_eq!(config.a2a.timeout, Duration::from_secs(5));
        assert_eq!(config.model.model_id, "gemini-1.5-pro");
        assert_eq!(config.model.base_url(), "http://127.0.0.1:9999");
        assert_eq!(config.model.max_tool_rounds, 3);
        assert_eq!(config.model.request_timeout_secs, 90);
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        for (key, value) in [(TIMEOUT_VAR, "soon"), (MAX_ROUNDS_VAR, "0"), (MAX_ROUNDS_VAR, "-2"), (MODEL_TIMEOUT_VAR, "0")] {
            let err = AppConfig::from_lookup(lookup(&[(API_KEY_VAR, "k"), (key, value)])).unwrap_err();
            assert!(matches!(err, BridgeError::Config(ref m) if m.contains(key)), "{key}={value}");
        }
    }
}
