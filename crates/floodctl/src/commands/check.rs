//! Knowledge document validation.

use anyhow::{Context, Result};
use flood_assistant::config::AssistantConfig;
use flood_assistant::KnowledgeBase;
use std::io::Write;
use std::path::Path;

/// Load and validate `file`, else the configured document, else the
/// embedded table. Any validation failure is returned as an error.
pub fn run<W: Write>(file: Option<&Path>, config: &AssistantConfig, out: &mut W) -> Result<()> {
    let (source, kb) = match file.or(config.knowledge.path.as_deref()) {
        Some(path) => (
            path.display().to_string(),
            KnowledgeBase::load(path)
                .with_context(|| format!("Invalid knowledge document {}", path.display()))?,
        ),
        None => (
            "embedded".to_string(),
            KnowledgeBase::builtin().context("Embedded knowledge table is invalid")?,
        ),
    };

    let keywords: usize = kb.entries().iter().map(|e| e.keywords().len()).sum();
    writeln!(
        out,
        "ok: {} ({} entries, {} keywords, 1 fallback)",
        source,
        kb.len(),
        keywords
    )?;
    Ok(())
}
