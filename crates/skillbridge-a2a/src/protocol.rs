//! A2A task-protocol message types.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use skillbridge_core::ToolArguments;
use skillbridge_skills::SkillDescriptor;
use uuid::Uuid;

/// MIME type of every data part we send.
pub const JSON_MIME_TYPE: &str = "application/json";

// --- Discovery ---

/// The discovery document served at `/.well-known/agent.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentCard {
    #[serde(default)]
    pub a2a: Option<A2aSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct A2aSection {
    /// `null` and absent both mean no skills.
    #[serde(default)]
    pub skills: Option<Vec<SkillDescriptor>>,
}

impl AgentCard {
    /// Skills listed under `a2a.skills`; empty when any level is missing or null.
    pub fn into_skills(self) -> Vec<SkillDescriptor> {
        self.a2a.and_then(|s| s.skills).unwrap_or_default()
    }
}

// --- Request ---

/// Generate a task id: millisecond clock plus a random suffix.
pub fn new_task_id() -> String {
    format!(
        "skillbridge-task-{}-{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

/// Body of `POST /a2a/tasks/send`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEnvelope {
    pub task_id: String,
    pub messages: Vec<TaskMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskMessage {
    pub role: &'static str,
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPart {
    pub data_part: RequestDataPart,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDataPart {
    pub mime_type: &'static str,
    pub json_data: ToolInvocation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    pub tool_name: String,
    pub arguments: ToolArguments,
}

impl TaskEnvelope {
    /// A single user message with a single data part naming the tool.
    pub fn for_tool(task_id: impl Into<String>, tool_name: impl Into<String>, arguments: ToolArguments) -> Self {
        Self {
            task_id: task_id.into(),
            messages: vec![TaskMessage {
                role: "user",
                parts: vec![RequestPart {
                    data_part: RequestDataPart {
                        mime_type: JSON_MIME_TYPE,
                        json_data: ToolInvocation {
                            tool_name: tool_name.into(),
                            arguments,
                        },
                    },
                }],
            }],
        }
    }
}

// --- Response ---

/// Body returned by `POST /a2a/tasks/send`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskResult {
    pub status: String,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub error: Option<TaskErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    #[serde(default)]
    pub parts: Vec<ArtifactPart>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactPart {
    #[serde(default)]
    pub data_part: Option<ArtifactData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactData {
    #[serde(default)]
    pub json_data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl TaskResult {
    /// `artifacts[0].parts[0].dataPart.jsonData`, if every step exists.
    pub fn first_json_data(&self) -> Option<&serde_json::Value> {
        self.artifacts
            .first()?
            .parts
            .first()?
            .data_part
            .as_ref()?
            .json_data
            .as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref()?.message.as_deref()
    }
}

/// Pull `error.message` out of an arbitrary error body.
pub fn error_body_message(body: &serde_json::Value) -> Option<&str> {
    body.get("error")?.get("message")?.as_str()
}
