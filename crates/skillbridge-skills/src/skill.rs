use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use skillbridge_core::{ToolArguments, ToolOutcome};

/// A remotely executable capability advertised by the task server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_input_schema", rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

fn default_input_schema() -> serde_json::Value {
    serde_json::json!({"type": "object", "properties": {}})
}

impl SkillDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// A skill as the LLM's tool-calling interface expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl From<&SkillDescriptor> for FunctionDeclaration {
    fn from(skill: &SkillDescriptor) -> Self {
        Self {
            name: skill.name.clone(),
            description: skill.description.clone(),
            parameters: skill.input_schema.clone(),
        }
    }
}

/// Executes one call of a known skill.
///
/// Implementations never fail: transport and remote errors come back as
/// [`ToolOutcome::Error`] so the model can see them.
#[async_trait]
pub trait SkillInvoker: Send + Sync {
    async fn invoke(&self, skill: &SkillDescriptor, arguments: ToolArguments) -> ToolOutcome;
}
