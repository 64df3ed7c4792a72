//! Terminal implementations of the session's line source and reply sink.

use async_trait::async_trait;
use skillbridge_agent::{LineSource, ReplySink};
use skillbridge_core::{BridgeError, BridgeResult};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub const PROMPT: &str = "You: ";

/// Reads user lines from stdin, printing the prompt before each one.
pub struct ConsoleSource {
    lines: Lines<BufReader<Stdin>>,
}

impl ConsoleSource {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for ConsoleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineSource for ConsoleSource {
    async fn next_line(&mut self) -> BridgeResult<Option<String>> {
        print!("{PROMPT}");
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }
}

/// Prints replies to stdout and failures to stderr.
pub struct ConsoleSink;

impl ReplySink for ConsoleSink {
    fn reply(&mut self, text: &str) {
        println!("{}", format_reply(text));
    }

    fn failure(&mut self, err: &BridgeError) {
        for line in format_failure(err) {
            eprintln!("{line}");
        }
    }

    fn notice(&mut self, text: &str) {
        println!("{text}");
    }
}

pub fn format_reply(text: &str) -> String {
    format!("\nGemini: {text}\n")
}

/// Lines printed for a failed turn; safety blocks get an extra explanation.
pub fn format_failure(err: &BridgeError) -> Vec<String> {
    let mut lines = vec![format!("\nAn error occurred: {err}")];
    if err.is_safety_block() {
        lines.push("Gemini Response Blocked due to Safety Settings.".to_string());
    }
    lines
}
