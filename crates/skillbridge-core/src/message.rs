use crate::tool::{ToolCallRequest, ToolOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The author of a [`Turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A human end-user.
    User,
    /// The language model.
    Model,
    /// Synthetic turn carrying tool outcomes back to the model.
    Function,
}

/// One piece of a [`Turn`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Part {
    /// Plain text.
    Text {
        /// The text content.
        text: String,
    },
    /// A function call emitted by the model.
    FunctionCall(ToolCallRequest),
    /// The outcome of a function call, matched to it by name.
    FunctionResponse {
        /// Name of the originating call.
        name: String,
        /// What the skill produced.
        outcome: ToolOutcome,
    },
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// A single entry of the conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Unique identifier for this turn.
    pub id: Uuid,
    /// Who authored the turn.
    pub role: Role,
    /// Ordered content of the turn.
    pub parts: Vec<Part>,
    /// UTC timestamp of when the turn was created.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Creates a turn with the given role and parts.
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            parts,
            timestamp: Utc::now(),
        }
    }

    /// Creates a [`Role::User`] text turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Part::text(text)])
    }

    /// Creates a [`Role::Model`] text turn.
    pub fn model_text(text: impl Into<String>) -> Self {
        Self::new(Role::Model, vec![Part::text(text)])
    }

    /// Creates the synthetic [`Role::Function`] turn answering a batch of calls.
    pub fn function_responses(responses: Vec<(String, ToolOutcome)>) -> Self {
        let parts = responses
            .into_iter()
            .map(|(name, outcome)| Part::FunctionResponse { name, outcome })
            .collect();
        Self::new(Role::Function, parts)
    }

    /// Concatenated text of all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Function calls contained in this turn, in emission order.
    pub fn function_calls(&self) -> Vec<&ToolCallRequest> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::FunctionCall(call) => Some(call),
                _ => None,
            })
            .collect()
    }
}
