//! The outer read-eval loop, independent of where lines come from.

use crate::conversation::Conversation;
use crate::orchestrator::ConversationOrchestrator;
use async_trait::async_trait;
use skillbridge_core::{BridgeError, BridgeResult};
use tracing::{error, info};

/// Sentinel line that ends a session (case-insensitive).
pub const QUIT_COMMAND: &str = "quit";

/// Where user lines come from. `Ok(None)` means end of input.
#[async_trait]
pub trait LineSource: Send {
    async fn next_line(&mut self) -> BridgeResult<Option<String>>;
}

/// Where replies, failures, and progress notices go.
pub trait ReplySink: Send {
    fn reply(&mut self, text: &str);
    fn failure(&mut self, err: &BridgeError);
    fn notice(&mut self, text: &str);
}

pub fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(QUIT_COMMAND)
}

/// Feeds lines to the orchestrator one at a time until `quit` or end of input.
pub struct SessionDriver<'a> {
    orchestrator: &'a ConversationOrchestrator,
}

impl<'a> SessionDriver<'a> {
    pub fn new(orchestrator: &'a ConversationOrchestrator) -> Self {
        Self { orchestrator }
    }

    /// Run the session. Returns the number of turns that completed successfully.
    ///
    /// Only a failing [`LineSource`] ends the session with an error; turn
    /// failures are reported to the sink and the loop continues.
    pub async fn run<S, O>(
        &self,
        conversation: &mut Conversation,
        source: &mut S,
        sink: &mut O,
    ) -> BridgeResult<usize>
    where
        S: LineSource + ?Sized,
        O: ReplySink + ?Sized,
    {
        let mut completed = 0;

        while let Some(line) = source.next_line().await? {
            if is_quit(&line) {
                break;
            }
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            sink.notice("Sending to Gemini...");
            match self.orchestrator.turn(conversation, input).await {
                Ok(text) => {
                    completed += 1;
                    sink.reply(&text);
                }
                Err(e) => {
                    error!(error = %e, "Turn failed");
                    sink.failure(&e);
                }
            }
        }

        info!(turns = completed, "Session ended");
        sink.notice("Chat ended.");
        Ok(completed)
    }
}
