//! Command tests against in-memory input and output.

use flood_assistant::config::{AssistantConfig, ColorMode};
use flood_assistant::{KnowledgeBase, KnowledgeEntry};
use floodctl::app::{load_config, AppContext, Overrides};
use floodctl::commands::{ask, chat, check, suggestions};
use std::fs;
use tempfile::tempdir;

fn context() -> AppContext {
    let mut config = AssistantConfig::default();
    config.output.color = ColorMode::Never;
    config.assistant.welcome = Some("Welcome!".to_string());
    let kb = KnowledgeBase::from_entries(vec![
        KnowledgeEntry::new("Warning?", ["warning"], "Go <strong>up</strong>."),
        KnowledgeEntry::new("Kit?", ["kit"], "Pack water."),
        KnowledgeEntry::fallback("", "General guidance."),
    ])
    .unwrap();
    AppContext::with_knowledge(config, kb)
}

fn text(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_ask_prints_exchange() {
    let ctx = context();
    let mut out = Vec::new();
    ask::run(&ctx, "Flood WARNING?", &mut out).await.unwrap();

    let output = text(out);
    assert!(output.contains("[you] Flood WARNING?"));
    assert!(output.contains("[assistant] Go up."));
    assert!(!output.contains("Welcome!"));
}

#[tokio::test(start_paused = true)]
async fn test_ask_blank_is_error() {
    let ctx = context();
    let mut out = Vec::new();
    assert!(ask::run(&ctx, "   ", &mut out).await.is_err());
    assert!(out.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_ask_json() {
    let mut ctx = context();
    ctx.json = true;
    let mut out = Vec::new();
    ask::run(&ctx, "something else", &mut out).await.unwrap();

    let messages: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["sender"], "user");
    assert_eq!(messages[1]["content"], "General guidance.");
}

#[tokio::test(start_paused = true)]
async fn test_chat_session_flow() {
    let ctx = context();
    let input: &[u8] = b"warning\n\n/2\n/9\n/close\nkit\n/open\n/quit\nnever read\n";
    let mut out = Vec::new();
    chat::run(&ctx, input, &mut out).await.unwrap();

    let output = text(out);
    assert!(output.starts_with("[assistant] Welcome!"));
    assert!(output.contains("/1 Warning?"));
    assert!(output.contains("[assistant] Go up."));
    // suggestion pick goes through submit with the question text
    assert!(output.contains("[you] Kit?"));
    assert!(output.contains("[assistant] Pack water."));
    assert!(output.contains("no suggestion 9 (1-2)"));
    assert!(output.contains("(assistant closed, /open to resume)"));
    assert!(!output.contains("[you] kit"));
    assert!(!output.contains("never read"));
    // reopen redraws the full log, welcome included
    assert_eq!(output.matches("[assistant] Welcome!").count(), 2);
}

#[test]
fn test_suggestions_listing() {
    let ctx = context();
    let mut out = Vec::new();
    suggestions::run(&ctx, &mut out).unwrap();
    assert_eq!(text(out), " 1. Warning?\n 2. Kit?\n");
}

#[test]
fn test_check_embedded() {
    let mut out = Vec::new();
    check::run(None, &AssistantConfig::default(), &mut out).unwrap();
    assert!(text(out).starts_with("ok: embedded (10 entries"));
}

#[test]
fn test_check_rejects_document_without_fallback() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        "[[entry]]\nquestion = \"q\"\nkeywords = [\"k\"]\nanswer = \"a\"\n",
    )
    .unwrap();

    let mut out = Vec::new();
    let err = check::run(Some(&path), &AssistantConfig::default(), &mut out).unwrap_err();
    assert!(format!("{:#}", err).contains("no fallback"));
    assert!(out.is_empty());
}

fn write_config_naming(dir: &std::path::Path, document: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    let mut config = AssistantConfig::default();
    config.knowledge.path = Some(document.to_path_buf());
    config.save_to(&path).unwrap();
    path
}

#[test]
fn test_check_uses_configured_document() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[[entry]]\nquestion = \"q\"\nkeywords = [\"k\"]\nanswer = \"a\"\n").unwrap();
    let config_path = write_config_naming(dir.path(), &bad);

    let config = load_config(&Overrides {
        config: Some(config_path),
        ..Default::default()
    })
    .unwrap();

    let mut out = Vec::new();
    let err = check::run(None, &config, &mut out).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("bad.toml"));
    assert!(message.contains("no fallback"));
}

#[test]
fn test_check_file_and_knowledge_flags_beat_config() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[[entry]]\nquestion = \"q\"\nkeywords = [\"k\"]\nanswer = \"a\"\n").unwrap();
    let good = dir.path().join("good.toml");
    fs::write(
        &good,
        "[[entry]]\nquestion = \"q\"\nkeywords = [\"k\"]\nanswer = \"a\"\n\n[fallback]\nanswer = \"f\"\n",
    )
    .unwrap();
    let config_path = write_config_naming(dir.path(), &bad);

    let config = load_config(&Overrides {
        config: Some(config_path.clone()),
        ..Default::default()
    })
    .unwrap();
    let mut out = Vec::new();
    check::run(Some(&good), &config, &mut out).unwrap();
    assert!(text(out).contains("good.toml (1 entries, 1 keywords, 1 fallback)"));

    // --knowledge replaces the configured path
    let config = load_config(&Overrides {
        config: Some(config_path),
        knowledge: Some(good.clone()),
        ..Default::default()
    })
    .unwrap();
    let mut out = Vec::new();
    check::run(None, &config, &mut out).unwrap();
    assert!(text(out).contains("good.toml"));
}
