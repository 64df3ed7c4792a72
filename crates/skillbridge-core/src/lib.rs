//! Core types and error definitions for SkillBridge.
//!
//! This crate provides the foundational types shared across all SkillBridge
//! crates: the error taxonomy, the conversation turn model, and the tool call
//! abstractions that sit between the LLM and the remote task server.
//!
//! # Main types
//!
//! - [`BridgeError`]: Unified error enum for every SkillBridge subsystem.
//! - [`BridgeResult`]: Convenience alias for `Result<T, BridgeError>`.
//! - [`Role`]: Author of a conversation turn (user, model, function).
//! - [`Turn`]: One entry of the conversation history, made of [`Part`]s.
//! - [`ToolCallRequest`]: An LLM-initiated request to run a remote skill.
//! - [`ToolOutcome`]: The normalized `{result}` / `{error}` answer to a request.

/// Error taxonomy.
pub mod error;
/// Conversation turns and their parts.
pub mod message;
/// Tool call requests and outcomes.
pub mod tool;

pub use error::{BridgeError, BridgeResult};
pub use message::{Part, Role, Turn};
pub use tool::{ToolArguments, ToolCallRequest, ToolOutcome};
