pub mod backends;
pub mod config;
pub mod conversation;
pub mod driver;
pub mod llm;
pub mod orchestrator;

pub use config::{LlmProvider, ModelConfig};
pub use conversation::Conversation;
pub use driver::{LineSource, ReplySink, SessionDriver};
pub use llm::{LlmClient, LlmResponse};
pub use orchestrator::ConversationOrchestrator;
