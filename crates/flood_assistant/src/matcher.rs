//! Intent matcher - free text to knowledge entry.
//!
//! First match wins: entries are scanned in declaration order and the first
//! one with any keyword contained in the normalized text is the intent. No
//! scoring. Anything unmatched resolves to the fallback, echoing the input as
//! its question.

use crate::knowledge::{KnowledgeBase, KnowledgeEntry};
use std::sync::Arc;
use tracing::debug;

/// Trim and lower-case user text for keyword matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub struct IntentMatcher {
    knowledge: Arc<KnowledgeBase>,
}

impl IntentMatcher {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Resolve raw user text to an entry.
    ///
    /// Callers must not pass blank text; [`ConversationSession::submit`]
    /// filters it out before getting here.
    ///
    /// [`ConversationSession::submit`]: crate::session::ConversationSession::submit
    pub fn resolve(&self, raw: &str) -> KnowledgeEntry {
        let trimmed = raw.trim();
        let normalized = trimmed.to_lowercase();

        match self.knowledge.position(&normalized) {
            Some(index) => {
                let entry = &self.knowledge.entries()[index];
                debug!(
                    index,
                    keyword = entry.matching_keyword(&normalized).unwrap_or_default(),
                    "intent matched"
                );
                entry.clone()
            }
            None => {
                debug!("no keyword rule matched, using fallback");
                KnowledgeEntry::fallback(trimmed, self.knowledge.fallback().answer_body())
            }
        }
    }
}
