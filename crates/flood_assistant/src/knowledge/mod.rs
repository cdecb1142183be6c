//! Ordered keyword knowledge base.
//!
//! Entries are immutable once the base is built. Exactly one entry has no
//! keywords: the fallback, which answers anything the keyword rules miss.
//! The base can come from the embedded FAQ table or from an external TOML or
//! JSON document; both keep declaration order.

mod builtin;

pub use builtin::{FALLBACK_ANSWER, WELCOME_MESSAGE};

use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A question with its keyword rules and canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    question: String,
    keywords: Vec<String>,
    answer: String,
}

impl KnowledgeEntry {
    /// Create a keyword entry. Keywords are trimmed and lower-cased.
    pub fn new<I, S>(question: impl Into<String>, keywords: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            question: question.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .collect(),
            answer: answer.into(),
        }
    }

    /// Create a fallback entry (no keywords).
    pub fn fallback(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            keywords: Vec::new(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn answer_body(&self) -> &str {
        &self.answer
    }

    pub fn is_fallback(&self) -> bool {
        self.keywords.is_empty()
    }

    /// First keyword contained in `normalized`, if any.
    ///
    /// Plain substring test with no word boundaries: "renews" hits "news".
    pub fn matching_keyword(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| normalized.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.matching_keyword(normalized).is_some()
    }
}

/// On-disk shape of an external knowledge document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    #[serde(default, rename = "entry")]
    pub entries: Vec<DocumentEntry>,
    pub fallback: Option<DocumentFallback>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub question: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFallback {
    #[serde(default)]
    pub question: String,
    pub answer: String,
}

/// Immutable, order-preserving set of knowledge entries plus the fallback.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    fallback: KnowledgeEntry,
}

impl KnowledgeBase {
    /// Build and validate a base from entries in declaration order.
    ///
    /// The single keyword-less entry becomes the fallback; it may appear
    /// anywhere in the list and does not take part in keyword matching.
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AssistantError::EmptyKnowledgeBase);
        }

        let mut fallback = None;
        let mut keyed = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            if entry.is_fallback() {
                if fallback.is_some() {
                    return Err(AssistantError::DuplicateFallback);
                }
                fallback = Some(entry);
                continue;
            }
            if entry.keywords.iter().any(|k| k.is_empty()) {
                return Err(AssistantError::InvalidKeyword { index });
            }
            keyed.push(entry);
        }

        let fallback = fallback.ok_or(AssistantError::MissingFallback)?;
        debug!(entries = keyed.len(), "knowledge base loaded");
        Ok(Self {
            entries: keyed,
            fallback,
        })
    }

    /// The embedded flood-safety FAQ.
    pub fn builtin() -> Result<Self> {
        let mut entries: Vec<KnowledgeEntry> = builtin::FAQ
            .iter()
            .map(|(q, keywords, a)| KnowledgeEntry::new(*q, keywords.iter(), *a))
            .collect();
        entries.push(KnowledgeEntry::fallback("", FALLBACK_ANSWER));
        Self::from_entries(entries)
    }

    /// Build a base from a parsed document.
    ///
    /// Unlike [`from_entries`](Self::from_entries), a document entry without
    /// keywords is an error: the fallback must be declared in `[fallback]`.
    pub fn from_document(doc: KnowledgeDocument) -> Result<Self> {
        let mut entries = Vec::with_capacity(doc.entries.len() + 1);
        for (index, e) in doc.entries.into_iter().enumerate() {
            if e.keywords.is_empty() {
                return Err(AssistantError::EntryWithoutKeywords {
                    index,
                    question: e.question,
                });
            }
            entries.push(KnowledgeEntry::new(e.question, e.keywords, e.answer));
        }
        if let Some(f) = doc.fallback {
            entries.push(KnowledgeEntry::fallback(f.question, f.answer));
        }
        Self::from_entries(entries)
    }

    /// Parse a TOML knowledge document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let doc: KnowledgeDocument = toml::from_str(contents)?;
        Self::from_document(doc)
    }

    /// Parse a JSON knowledge document.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let doc: KnowledgeDocument = serde_json::from_str(contents)?;
        Self::from_document(doc)
    }

    /// Load a knowledge document from disk; `.json` files are read as JSON,
    /// everything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        debug!(path = %path.display(), json = is_json, "loading knowledge document");
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// Export the base back into document form.
    pub fn to_document(&self) -> KnowledgeDocument {
        KnowledgeDocument {
            entries: self
                .entries
                .iter()
                .map(|e| DocumentEntry {
                    question: e.question.clone(),
                    keywords: e.keywords.clone(),
                    answer: e.answer.clone(),
                })
                .collect(),
            fallback: Some(DocumentFallback {
                question: self.fallback.question.clone(),
                answer: self.fallback.answer.clone(),
            }),
        }
    }

    /// First entry whose keywords hit `normalized`, else the fallback.
    pub fn lookup(&self, normalized: &str) -> &KnowledgeEntry {
        self.position(normalized)
            .map(|i| &self.entries[i])
            .unwrap_or(&self.fallback)
    }

    /// Declaration index of the first matching keyword entry.
    pub fn position(&self, normalized: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.matches(normalized))
    }

    /// Keyword entries in declaration order (fallback excluded).
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn fallback(&self) -> &KnowledgeEntry {
        &self.fallback
    }

    /// Suggested questions, in declaration order.
    pub fn suggestions(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.question()).collect()
    }

    /// Number of keyword entries (fallback excluded).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.len(), 10);
        assert!(kb.fallback().is_fallback());
        assert_eq!(kb.fallback().answer_body(), FALLBACK_ANSWER);
    }

    #[test]
    fn test_keywords_are_normalized() {
        let entry = KnowledgeEntry::new("q", ["  Warning ", "ALERT"], "a");
        assert_eq!(entry.keywords(), &["warning".to_string(), "alert".to_string()]);
    }

    #[test]
    fn test_missing_fallback_rejected() {
        let err = KnowledgeBase::from_entries(vec![KnowledgeEntry::new("q", ["x"], "a")]).unwrap_err();
        assert!(matches!(err, AssistantError::MissingFallback));
    }

    #[test]
    fn test_duplicate_fallback_rejected() {
        let err = KnowledgeBase::from_entries(vec![
            KnowledgeEntry::fallback("", "one"),
            KnowledgeEntry::fallback("", "two"),
        ])
        .unwrap_err();
        assert!(matches!(err, AssistantError::DuplicateFallback));
    }

    #[test]
    fn test_empty_rejected() {
        let err = KnowledgeBase::from_entries(Vec::new()).unwrap_err();
        assert!(matches!(err, AssistantError::EmptyKnowledgeBase));
        assert!(err.is_knowledge_error());
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let err = KnowledgeBase::from_entries(vec![
            KnowledgeEntry::new("q", ["ok", "   "], "a"),
            KnowledgeEntry::fallback("", "f"),
        ])
        .unwrap_err();
        assert!(matches!(err, AssistantError::InvalidKeyword { index: 0 }));
    }

    #[test]
    fn test_fallback_position_is_irrelevant() {
        let kb = KnowledgeBase::from_entries(vec![
            KnowledgeEntry::fallback("", "f"),
            KnowledgeEntry::new("q", ["rain"], "a"),
        ])
        .unwrap();
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.lookup("heavy rain").question(), "q");
        assert!(kb.lookup("sunny").is_fallback());
    }
}
