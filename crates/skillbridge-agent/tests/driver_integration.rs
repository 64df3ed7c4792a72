#![allow(clippy::unwrap_used, clippy::expect_used)]

//! SessionDriver with scripted input and a recording sink.

use async_trait::async_trait;
use skillbridge_agent::backends::LlmBackend;
use skillbridge_agent::{
    Conversation, ConversationOrchestrator, LineSource, LlmClient, LlmResponse, ReplySink,
    SessionDriver,
};
use skillbridge_core::{BridgeError, BridgeResult, ToolArguments, ToolOutcome, Turn};
use skillbridge_skills::{FunctionDeclaration, SkillCatalog, SkillDescriptor, SkillInvoker};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Echoes the last user line back, or fails when the line says "fail".
struct EchoBackend {
    calls: Arc<Mutex<usize>>,
}

#[async_trait]
impl LlmBackend for EchoBackend {
    async fn chat(
        &self,
        _system_instruction: Option<&str>,
        turns: &[Turn],
        _tools: &[FunctionDeclaration],
    ) -> BridgeResult<LlmResponse> {
        *self.calls.lock().unwrap() += 1;
        let last = turns.last().map(Turn::text).unwrap_or_default();
        match last.as_str() {
            "fail" => Err(BridgeError::Http("Gemini API error 500: boom".into())),
            "unsafe" => Err(BridgeError::ModelTurn("Response was blocked due to SAFETY".into())),
            _ => Ok(LlmResponse::Text(format!("echo: {last}"))),
        }
    }
}

struct NeverInvoked;

#[async_trait]
impl SkillInvoker for NeverInvoked {
    async fn invoke(&self, skill: &SkillDescriptor, _arguments: ToolArguments) -> ToolOutcome {
        panic!("unexpected invocation of {}", skill.name)
    }
}

struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[async_trait]
impl LineSource for ScriptedSource {
    async fn next_line(&mut self) -> BridgeResult<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

struct BrokenSource;

#[async_trait]
impl LineSource for BrokenSource {
    async fn next_line(&mut self) -> BridgeResult<Option<String>> {
        Err(BridgeError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdin closed",
        )))
    }
}

#[derive(Debug, PartialEq)]
enum Event {
    Reply(String),
    Failure(String),
    Notice(String),
}

#[derive(Default)]
struct RecordingSink {
    events: Vec<Event>,
}

impl ReplySink for RecordingSink {
    fn reply(&mut self, text: &str) {
        self.events.push(Event::Reply(text.to_string()));
    }

    fn failure(&mut self, err: &BridgeError) {
        self.events.push(Event::Failure(err.to_string()));
    }

    fn notice(&mut self, text: &str) {
        self.events.push(Event::Notice(text.to_string()));
    }
}

fn orchestrator() -> (ConversationOrchestrator, Arc<Mutex<usize>>) {
    let calls = Arc::new(Mutex::new(0));
    let llm = LlmClient::from_backend(Box::new(EchoBackend {
        calls: calls.clone(),
    }));
    let orchestrator =
        ConversationOrchestrator::with_llm(llm, Arc::new(SkillCatalog::empty()), Arc::new(NeverInvoked));
    (orchestrator, calls)
}

#[tokio::test]
async fn quit_ends_session_case_insensitively() {
    let (orchestrator, calls) = orchestrator();
    let mut conversation = Conversation::new();
    let mut source = ScriptedSource::new(&["hello", "  QuIt  ", "never sent"]);
    let mut sink = RecordingSink::default();

    let completed = SessionDriver::new(&orchestrator)
        .run(&mut conversation, &mut source, &mut sink)
        .await
        .unwrap();

    assert_eq!(completed, 1);
    assert_eq!(*calls.lock().unwrap(), 1);
    assert_eq!(
        sink.events,
        vec![
            Event::Notice("Sending to Gemini...".into()),
            Event::Reply("echo: hello".into()),
            Event::Notice("Chat ended.".into()),
        ]
    );
    assert_eq!(source.lines.len(), 1);
}

#[tokio::test]
async fn blank_lines_are_skipped_and_eof_ends() {
    let (orchestrator, calls) = orchestrator();
    let mut conversation = Conversation::new();
    let mut source = ScriptedSource::new(&["", "   ", "one", "\t", "two"]);
    let mut sink = RecordingSink::default();

    let completed = SessionDriver::new(&orchestrator)
        .run(&mut conversation, &mut source, &mut sink)
        .await
        .unwrap();

    assert_eq!(completed, 2);
    assert_eq!(*calls.lock().unwrap(), 2);
    assert_eq!(conversation.len(), 4);
    assert_eq!(sink.events.last(), Some(&Event::Notice("Chat ended.".into())));
}

#[tokio::test]
async fn failed_turn_is_reported_and_session_continues() {
    let (orchestrator, _) = orchestrator();
    let mut conversation = Conversation::new();
    let mut source = ScriptedSource::new(&["first", "fail", "unsafe", "after"]);
    let mut sink = RecordingSink::default();

    let completed = SessionDriver::new(&orchestrator)
        .run(&mut conversation, &mut source, &mut sink)
        .await
        .unwrap();

    assert_eq!(completed, 2);
    let failures: Vec<&Event> = sink
        .events
        .iter()
        .filter(|e| matches!(e, Event::Failure(_)))
        .collect();
    assert_eq!(failures.len(), 2);
    assert!(matches!(failures[0], Event::Failure(m) if m.contains("boom")));
    assert!(matches!(failures[1], Event::Failure(m) if m.contains("SAFETY")));
    assert!(sink.events.contains(&Event::Reply("echo: after".into())));

    // Failed turns leave no trace in the history.
    let texts: Vec<String> = conversation.turns().iter().map(Turn::text).collect();
    assert_eq!(texts, vec!["first", "echo: first", "after", "echo: after"]);
}

#[tokio::test]
async fn input_is_trimmed_before_sending() {
    let (orchestrator, _) = orchestrator();
    let mut conversation = Conversation::new();
    let mut source = ScriptedSource::new(&["  hi there \n"]);
    let mut sink = RecordingSink::default();

    SessionDriver::new(&orchestrator)
        .run(&mut conversation, &mut source, &mut sink)
        .await
        .unwrap();

    assert_eq!(conversation.turns()[0].text(), "hi there");
}

#[tokio::test]
async fn broken_source_ends_with_error() {
    let (orchestrator, calls) = orchestrator();
    let mut conversation = Conversation::new();
    let mut sink = RecordingSink::default();

    let result = SessionDriver::new(&orchestrator)
        .run(&mut conversation, &mut BrokenSource, &mut sink)
        .await;

    assert!(matches!(result, Err(BridgeError::Io(_))));
    assert_eq!(*calls.lock().unwrap(), 0);
}
