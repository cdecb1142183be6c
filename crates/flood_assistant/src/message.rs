//! Conversation messages and the append-only log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "you"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single appended message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub sender: Sender,
    pub content: String,
    /// Position in append order, starting at 1
    pub sequence: u64,
    pub created_at: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }
}

/// Append-only message log with strictly increasing sequence numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<ConversationMessage>,
    next_sequence: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, assigning the next sequence number.
    pub fn append(&mut self, sender: Sender, content: impl Into<String>) -> &ConversationMessage {
        self.next_sequence += 1;
        self.messages.push(ConversationMessage {
            sender,
            content: content.into(),
            sequence: self.next_sequence,
            created_at: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Messages appended after `sequence`.
    pub fn since(&self, sequence: u64) -> &[ConversationMessage] {
        let start = self.messages.partition_point(|m| m.sequence <= sequence);
        &self.messages[start..]
    }

    pub fn last_sequence(&self) -> u64 {
        self.next_sequence
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
