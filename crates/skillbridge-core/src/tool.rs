use crate::error::BridgeError;
use serde::{Deserialize, Serialize};

/// Arguments of a tool call: a JSON object keyed by parameter name.
pub type ToolArguments = serde_json::Map<String, serde_json::Value>;

/// A request from the LLM to invoke a remote skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Name of the skill to invoke.
    pub name: String,
    /// Arguments to pass to the skill.
    #[serde(default)]
    pub arguments: ToolArguments,
}

impl ToolCallRequest {
    /// Creates a request from a name and a JSON value.
    ///
    /// Anything other than a JSON object yields empty arguments.
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            _ => ToolArguments::new(),
        };
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Normalized outcome of one tool call, fed back to the model.
///
/// Serializes as `{"result": ...}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolOutcome {
    /// The skill ran; its payload is opaque JSON (possibly `null`).
    Result(serde_json::Value),
    /// The skill could not be run or reported a failure.
    Error(String),
}

impl ToolOutcome {
    /// Creates a successful outcome.
    pub fn success(value: serde_json::Value) -> Self {
        Self::Result(value)
    }

    /// Creates an error outcome.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Folds an error into an outcome the model can read.
    pub fn from_error(err: &BridgeError) -> Self {
        Self::Error(err.to_string())
    }

    /// Whether the outcome carries an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The function-response body expected by the model: `{"content": outcome}`.
    pub fn to_response(&self) -> serde_json::Value {
        serde_json::json!({ "content": self })
    }
}
