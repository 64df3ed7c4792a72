use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Google Gemini `generateContent` API with function calling.
    Gemini,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_provider")]
    pub provider: LlmProvider,
    #[serde(default = "default_model_id")]
    pub model_id: String,
    pub api_key: String,
    pub api_base_url: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Upper bound on tool-dispatch rounds within one user turn.
    #[serde(default = "default_max_tool_rounds")]
    pub max_tool_rounds: u32,
    #[serde(default = "default_system_instruction")]
    pub system_instruction: Option<String>,
    /// Start new conversations with the canned greeting exchange.
    #[serde(default = "default_seed_history")]
    pub seed_history: bool,
    #[serde(default = "default_safety_threshold")]
    pub safety_threshold: String,
    /// Upper bound on one `generateContent` request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_provider() -> LlmProvider {
    LlmProvider::Gemini
}

fn default_model_id() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_max_tool_rounds() -> u32 {
    10
}

fn default_system_instruction() -> Option<String> {
    Some(
        "You are a helpful assistant with access to Google Maps tools. Please use the most \
         appropriate tool to answer the user's request based on the information they provide. \
         For example, if they provide a place name or address for an elevation query, use the \
         tool designed for that input."
            .to_string(),
    )
}

fn default_seed_history() -> bool {
    true
}

fn default_safety_threshold() -> String {
    "BLOCK_MEDIUM_AND_ABOVE".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl ModelConfig {
    /// A Gemini config with every optional field at its default.
    pub fn gemini(api_key: impl Into<String>) -> Self {
        Self {
            provider: default_provider(),
            model_id: default_model_id(),
            api_key: api_key.into(),
            api_base_url: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            max_tool_rounds: default_max_tool_rounds(),
            system_instruction: default_system_instruction(),
            seed_history: default_seed_history(),
            safety_threshold: default_safety_threshold(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    pub fn base_url(&self) -> &str {
        if let Some(url) = &self.api_base_url {
            url.trim_end_matches('/')
        } else {
            match self.provider {
                LlmProvider::Gemini => "https://generativelanguage.googleapis.com",
            }
        }
    }
}
