use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skillbridge_core::Turn;
use uuid::Uuid;

const SEED_USER: &str = "Hi, what tools do you have?";
const SEED_MODEL: &str = "Okay, I understand. I can use my available tools to help with \
                          map-related questions. How can I assist you today?";

/// Ordered history of one chat session.
///
/// Only the orchestrator mutates it, and only once a turn has fully succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    turns: Vec<Turn>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// A conversation opened with the canned greeting exchange.
    pub fn seeded() -> Self {
        let mut conversation = Self::new();
        conversation.push(Turn::user(SEED_USER));
        conversation.push(Turn::model_text(SEED_MODEL));
        conversation
    }

    pub fn push(&mut self, turn: Turn) {
        self.updated_at = Utc::now();
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
