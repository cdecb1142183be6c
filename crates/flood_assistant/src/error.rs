//! Error types for the flood assistant.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssistantError>;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Knowledge base has no entries")]
    EmptyKnowledgeBase,

    #[error("Knowledge base has no fallback entry")]
    MissingFallback,

    #[error("Knowledge base declares more than one fallback entry")]
    DuplicateFallback,

    #[error("Knowledge entry {index} ({question:?}) has no keywords")]
    EntryWithoutKeywords { index: usize, question: String },

    #[error("Knowledge entry {index} has an empty keyword")]
    InvalidKeyword { index: usize },

    #[error("Knowledge document parse error: {0}")]
    KnowledgeParse(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssistantError {
    pub fn code(&self) -> i32 {
        match self {
            AssistantError::EmptyKnowledgeBase => -32010,
            AssistantError::MissingFallback => -32011,
            AssistantError::DuplicateFallback => -32012,
            AssistantError::EntryWithoutKeywords { .. } => -32013,
            AssistantError::InvalidKeyword { .. } => -32014,
            AssistantError::KnowledgeParse(_) => -32015,
            AssistantError::Config(_) => -32020,
            AssistantError::Io(_) => -32006,
            AssistantError::Json(_) => -32700,
        }
    }

    /// Whether this error leaves the knowledge base unusable.
    pub fn is_knowledge_error(&self) -> bool {
        matches!(
            self,
            AssistantError::EmptyKnowledgeBase
                | AssistantError::MissingFallback
                | AssistantError::DuplicateFallback
                | AssistantError::EntryWithoutKeywords { .. }
                | AssistantError::InvalidKeyword { .. }
                | AssistantError::KnowledgeParse(_)
        )
    }
}
