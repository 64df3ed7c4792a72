use crate::backends::gemini::GeminiBackend;
use crate::backends::LlmBackend;
use crate::config::{LlmProvider, ModelConfig};
use skillbridge_core::{BridgeResult, Part, Role, ToolCallRequest, Turn};
use skillbridge_skills::FunctionDeclaration;

/// Response from the LLM: either a final answer or a batch of function calls.
#[derive(Debug, Clone, PartialEq)]
pub enum LlmResponse {
    Text(String),
    ToolUse {
        content: Option<String>,
        tool_calls: Vec<ToolCallRequest>,
    },
}

impl LlmResponse {
    /// The model turn to record in the conversation.
    pub fn to_turn(&self) -> Turn {
        match self {
            Self::Text(text) => Turn::model_text(text),
            Self::ToolUse {
                content,
                tool_calls,
            } => {
                let mut parts: Vec<Part> = content.iter().map(Part::text).collect();
                parts.extend(tool_calls.iter().cloned().map(Part::FunctionCall));
                Turn::new(Role::Model, parts)
            }
        }
    }
}

/// LLM client that dispatches to the configured provider backend.
pub struct LlmClient {
    backend: Box<dyn LlmBackend>,
}

impl LlmClient {
    pub fn new(config: ModelConfig) -> Self {
        let backend: Box<dyn LlmBackend> = match config.provider {
            LlmProvider::Gemini => Box::new(GeminiBackend::new(config)),
        };
        Self { backend }
    }

    /// Create from a pre-built backend (scripted backends in tests, other providers).
    pub fn from_backend(backend: Box<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    pub async fn chat(
        &self,
        system_instruction: Option<&str>,
        turns: &[Turn],
        tools: &[FunctionDeclaration],
    ) -> BridgeResult<LlmResponse> {
        self.backend.chat(system_instruction, turns, tools).await
    }
}
