use thiserror::Error;

/// A convenience `Result` alias using [`BridgeError`].
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Top-level error type for SkillBridge.
///
/// `DispatchTransport`, `RemoteTaskFailure` and `UnknownSkill` never reach the
/// session loop: they are folded into a [`crate::ToolOutcome`] and handed back
/// to the model as data.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The agent card could not be fetched or parsed.
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// The task POST failed at the transport level (network, timeout, bad body).
    #[error("{0}")]
    DispatchTransport(String),

    /// The remote server reported the task as failed, or rejected it.
    #[error("{0}")]
    RemoteTaskFailure(String),

    /// The model named a skill that is not in the catalog.
    #[error("Function {0} is not available.")]
    UnknownSkill(String),

    /// Talking to the model failed; the conversation is left untouched.
    #[error("Model turn error: {0}")]
    ModelTurn(String),

    /// Missing or invalid configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// An outbound HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// Whether this error comes from the model refusing content on safety grounds.
    pub fn is_safety_block(&self) -> bool {
        matches!(self, Self::ModelTurn(msg) if msg.contains("SAFETY"))
    }
}
