//! Adapter that runs catalog skills as A2A tasks.

use crate::client::A2aClient;
use crate::protocol::{new_task_id, TaskEnvelope, TaskResult};
use async_trait::async_trait;
use skillbridge_core::{BridgeError, ToolArguments, ToolOutcome};
use skillbridge_skills::{SkillDescriptor, SkillInvoker};
use tracing::{error, info, warn};

/// Invokes skills on an A2A server, one task per call.
#[derive(Debug, Clone)]
pub struct A2aInvoker {
    client: A2aClient,
}

impl A2aInvoker {
    pub fn new(client: A2aClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SkillInvoker for A2aInvoker {
    async fn invoke(&self, skill: &SkillDescriptor, arguments: ToolArguments) -> ToolOutcome {
        let task_id = new_task_id();
        info!(skill = %skill.name, task_id = %task_id, "Calling remote skill");

        let envelope = TaskEnvelope::for_tool(&task_id, &skill.name, arguments);
        match self.client.send_task(&envelope).await {
            Ok(result) => interpret(&skill.name, &task_id, result),
            Err(BridgeError::DispatchTransport(detail)) => {
                error!(skill = %skill.name, task_id = %task_id, error = %detail, "Remote skill call failed");
                ToolOutcome::error(format!("Failed to execute tool {}: {detail}", skill.name))
            }
            Err(e) => {
                error!(skill = %skill.name, task_id = %task_id, error = %e, "Remote skill rejected");
                ToolOutcome::from_error(&e)
            }
        }
    }
}

/// Map a parsed task result onto an outcome.
pub fn interpret(skill: &str, task_id: &str, result: TaskResult) -> ToolOutcome {
    info!(skill = %skill, task_id = %task_id, status = %result.status, "Task response");
    match result.status.as_str() {
        "completed" => match result.first_json_data() {
            Some(data) => ToolOutcome::success(data.clone()),
            None => {
                warn!(skill = %skill, task_id = %task_id, "Task completed without artifact data");
                ToolOutcome::success(serde_json::Value::Null)
            }
        },
        "failed" => {
            let message = result.error_message().unwrap_or("task failed");
            error!(skill = %skill, task_id = %task_id, error = %message, "Remote task failed");
            ToolOutcome::from_error(&BridgeError::RemoteTaskFailure(message.to_string()))
        }
        other => {
            error!(skill = %skill, task_id = %task_id, status = %other, "Unexpected task status");
            ToolOutcome::error(format!("unexpected status: {other}"))
        }
    }
}
