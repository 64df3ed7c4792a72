use crate::config::ModelConfig;
use crate::conversation::Conversation;
use crate::llm::{LlmClient, LlmResponse};
use futures_util::future::join_all;
use skillbridge_core::{BridgeError, BridgeResult, ToolCallRequest, ToolOutcome, Turn};
use skillbridge_skills::{FunctionDeclaration, SkillCatalog, SkillInvoker};
use std::sync::Arc;
use tracing::{info, warn};

/// Drives one user turn through zero or more tool-dispatch rounds.
/// Prompt → LLM → function calls → remote skills → function responses → repeat.
pub struct ConversationOrchestrator {
    llm: LlmClient,
    catalog: Arc<SkillCatalog>,
    declarations: Vec<FunctionDeclaration>,
    invoker: Arc<dyn SkillInvoker>,
    system_instruction: Option<String>,
    seed_history: bool,
    max_tool_rounds: u32,
}

impl ConversationOrchestrator {
    pub fn new(
        config: ModelConfig,
        catalog: Arc<SkillCatalog>,
        invoker: Arc<dyn SkillInvoker>,
    ) -> Self {
        let system_instruction = config.system_instruction.clone();
        let seed_history = config.seed_history;
        let max_tool_rounds = config.max_tool_rounds;
        Self::with_llm(LlmClient::new(config), catalog, invoker)
            .with_system_instruction(system_instruction)
            .with_seed_history(seed_history)
            .with_max_tool_rounds(max_tool_rounds)
    }

    /// Build around an existing client; no system instruction, no seed, 10 rounds.
    pub fn with_llm(
        llm: LlmClient,
        catalog: Arc<SkillCatalog>,
        invoker: Arc<dyn SkillInvoker>,
    ) -> Self {
        let declarations = catalog.declarations();
        Self {
            llm,
            catalog,
            declarations,
            invoker,
            system_instruction: None,
            seed_history: false,
            max_tool_rounds: 10,
        }
    }

    pub fn with_system_instruction(mut self, instruction: Option<String>) -> Self {
        self.system_instruction = instruction;
        self
    }

    pub fn with_seed_history(mut self, seed: bool) -> Self {
        self.seed_history = seed;
        self
    }

    pub fn with_max_tool_rounds(mut self, rounds: u32) -> Self {
        self.max_tool_rounds = rounds;
        self
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// A fresh conversation, seeded if configured.
    pub fn start_conversation(&self) -> Conversation {
        if self.seed_history {
            Conversation::seeded()
        } else {
            Conversation::new()
        }
    }

    /// Run one user turn and return the model's final text.
    ///
    /// The turn is staged on a copy of `conversation`; on error the caller's
    /// conversation is left exactly as it was.
    pub async fn turn(
        &self,
        conversation: &mut Conversation,
        user_text: &str,
    ) -> BridgeResult<String> {
        let mut staged = conversation.clone();
        staged.push(Turn::user(user_text));

        info!(conversation_id = %staged.id, "Starting turn");
        let mut response = self.send(&staged).await?;
        let mut round = 0;

        loop {
            let tool_calls = match &response {
                LlmResponse::Text(text) => {
                    staged.push(Turn::model_text(text));
                    *conversation = staged;
                    info!(conversation_id = %conversation.id, rounds = round, "Turn completed");
                    return Ok(text.clone());
                }
                LlmResponse::ToolUse { tool_calls, .. } => tool_calls.clone(),
            };

            if round >= self.max_tool_rounds {
                warn!(
                    conversation_id = %staged.id,
                    max_tool_rounds = self.max_tool_rounds,
                    "Tool-call round limit reached"
                );
                return Err(BridgeError::ModelTurn(format!(
                    "model kept requesting tools after {} rounds",
                    self.max_tool_rounds
                )));
            }
            round += 1;
            info!(round, calls = tool_calls.len(), "Dispatching function calls");

            staged.push(response.to_turn());
            let outcomes = self.dispatch(&tool_calls).await;
            staged.push(Turn::function_responses(outcomes));

            response = self.send(&staged).await?;
        }
    }

    /// Run every call of one batch, concurrently, keeping emission order.
    pub async fn dispatch(&self, calls: &[ToolCallRequest]) -> Vec<(String, ToolOutcome)> {
        let pending = calls.iter().map(|call| async move {
            let outcome = match self.catalog.resolve(&call.name) {
                Some(skill) => self.invoker.invoke(skill, call.arguments.clone()).await,
                None => {
                    warn!(skill = %call.name, "Model called unknown function");
                    ToolOutcome::from_error(&BridgeError::UnknownSkill(call.name.clone()))
                }
            };
            (call.name.clone(), outcome)
        });
        join_all(pending).await
    }

    async fn send(&self, conversation: &Conversation) -> BridgeResult<LlmResponse> {
        self.llm
            .chat(
                self.system_instruction.as_deref(),
                conversation.turns(),
                &self.declarations,
            )
            .await
            .map_err(|e| match e {
                BridgeError::ModelTurn(_) => e,
                other => BridgeError::ModelTurn(other.to_string()),
            })
    }
}
