//! Knowledge document loading tests.

use flood_assistant::knowledge::KnowledgeBase;
use flood_assistant::AssistantError;
use std::fs;
use tempfile::tempdir;

const DOC: &str = r#"
[[entry]]
question = "Is the river rising?"
keywords = ["River", "  water level "]
answer = "Check the district gauge."

[[entry]]
question = "Where is the shelter?"
keywords = ["shelter", "camp"]
answer = "Nearest school building."

[fallback]
answer = "Call 112."
"#;

#[test]
fn test_toml_document_keeps_order_and_normalizes() {
    let kb = KnowledgeBase::from_toml_str(DOC).unwrap();
    assert_eq!(kb.len(), 2);
    assert_eq!(
        kb.suggestions(),
        vec!["Is the river rising?", "Where is the shelter?"]
    );
    assert_eq!(kb.entries()[0].keywords(), &["river".to_string(), "water level".to_string()]);
    assert_eq!(kb.fallback().answer_body(), "Call 112.");
}

#[test]
fn test_missing_fallback_is_fatal() {
    let doc = r#"
[[entry]]
question = "q"
keywords = ["k"]
answer = "a"
"#;
    let err = KnowledgeBase::from_toml_str(doc).unwrap_err();
    assert!(matches!(err, AssistantError::MissingFallback));
    assert!(err.is_knowledge_error());
}

#[test]
fn test_entry_without_keywords_is_rejected() {
    let doc = r#"
[[entry]]
question = "No rules"
answer = "a"

[fallback]
answer = "f"
"#;
    let err = KnowledgeBase::from_toml_str(doc).unwrap_err();
    match err {
        AssistantError::EntryWithoutKeywords { index, question } => {
            assert_eq!(index, 0);
            assert_eq!(question, "No rules");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_malformed_document() {
    let err = KnowledgeBase::from_toml_str("[[entry]\nquestion = ").unwrap_err();
    assert!(matches!(err, AssistantError::KnowledgeParse(_)));
}

#[test]
fn test_load_from_disk_by_extension() {
    let dir = tempdir().unwrap();

    let toml_path = dir.path().join("faq.toml");
    fs::write(&toml_path, DOC).unwrap();
    let from_toml = KnowledgeBase::load(&toml_path).unwrap();

    let doc = from_toml.to_document();
    let json_path = dir.path().join("faq.json");
    fs::write(&json_path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    let from_json = KnowledgeBase::load(&json_path).unwrap();

    assert_eq!(from_json.entries(), from_toml.entries());
    assert_eq!(from_json.fallback(), from_toml.fallback());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = KnowledgeBase::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, AssistantError::Io(_)));
}

#[test]
fn test_builtin_exports_as_document() {
    let kb = KnowledgeBase::builtin().unwrap();
    let toml = toml::to_string(&kb.to_document()).unwrap();
    let reparsed = KnowledgeBase::from_toml_str(&toml).unwrap();
    assert_eq!(reparsed.entries(), kb.entries());
}
