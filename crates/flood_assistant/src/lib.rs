//! Flood-safety assistant core.
//!
//! Resolves free-text questions against an ordered keyword knowledge base and
//! keeps a turn-based conversation log with delayed assistant replies.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod matcher;
pub mod message;
pub mod render;
pub mod scheduler;
pub mod session;

pub use config::{AssistantConfig, ColorMode, MarkupMode};
pub use error::{AssistantError, Result};
pub use knowledge::{KnowledgeBase, KnowledgeDocument, KnowledgeEntry, FALLBACK_ANSWER, WELCOME_MESSAGE};
pub use matcher::{normalize, IntentMatcher};
pub use message::{ConversationMessage, MessageLog, Sender};
pub use render::{render_transcript, RenderOptions};
pub use scheduler::{ReplyTicket, ResponseScheduler, DEFAULT_REPLY_DELAY_MS};
pub use session::{ConversationSession, SessionOptions, Submission};
