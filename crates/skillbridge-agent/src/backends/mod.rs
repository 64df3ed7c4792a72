pub mod gemini;

use crate::llm::LlmResponse;
use async_trait::async_trait;
use skillbridge_core::{BridgeResult, Turn};
use skillbridge_skills::FunctionDeclaration;

/// Trait for LLM provider backends.
///
/// A backend turns the conversation so far plus the declared functions into
/// one provider request, and the provider's reply into an [`LlmResponse`].
///
/// To add a new provider:
/// 1. Create a new module in `backends/`
/// 2. Implement `LlmBackend` for your struct
/// 3. Add the variant to `LlmProvider` in `config.rs`
/// 4. Wire it up in `LlmClient::new()` in `llm.rs`
#[async_trait]
pub trait LlmBackend: Send + Sync {
    async fn chat(
        &self,
        system_instruction: Option<&str>,
        turns: &[Turn],
        tools: &[FunctionDeclaration],
    ) -> BridgeResult<LlmResponse>;
}
