//! Shared command context: config, knowledge base, output settings.

use anyhow::{Context, Result};
use flood_assistant::config::{AssistantConfig, ColorMode};
use flood_assistant::{
    render_transcript, ConversationMessage, ConversationSession, KnowledgeBase, RenderOptions,
};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Overrides taken from global command-line flags
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub knowledge: Option<PathBuf>,
    pub delay_ms: Option<u64>,
    pub json: bool,
}

fn apply_overrides(config: &mut AssistantConfig, overrides: &Overrides) {
    if let Some(path) = &overrides.knowledge {
        config.knowledge.path = Some(path.clone());
    }
    if let Some(ms) = overrides.delay_ms {
        config.assistant.reply_delay_ms = ms;
    }
}

/// Load the config file and apply command-line overrides.
pub fn load_config(overrides: &Overrides) -> Result<AssistantConfig> {
    let mut config = AssistantConfig::load(overrides.config.as_deref())
        .context("Failed to load configuration")?;
    apply_overrides(&mut config, overrides);
    Ok(config)
}

pub struct AppContext {
    pub config: AssistantConfig,
    pub knowledge: Arc<KnowledgeBase>,
    pub json: bool,
}

impl AppContext {
    /// Load config and knowledge. A knowledge base that fails validation
    /// stops here, before any session exists.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let config = load_config(&overrides)?;
        let knowledge = config
            .load_knowledge()
            .context("Failed to load knowledge base")?;
        debug!(entries = knowledge.len(), "knowledge ready");

        Ok(Self {
            config,
            knowledge: Arc::new(knowledge),
            json: overrides.json,
        })
    }

    /// Context over an already-built knowledge base (tests, embedding).
    pub fn with_knowledge(config: AssistantConfig, knowledge: KnowledgeBase) -> Self {
        Self {
            config,
            knowledge: Arc::new(knowledge),
            json: false,
        }
    }

    pub fn new_session(&self) -> ConversationSession {
        ConversationSession::new(Arc::clone(&self.knowledge), self.config.session_options())
    }

    pub fn render_options(&self) -> RenderOptions {
        let color = match self.config.output.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        };
        RenderOptions {
            color,
            markup: self.config.output.markup,
        }
    }

    /// Write messages as text or JSON.
    pub fn write_messages<W: Write>(&self, out: &mut W, messages: &[ConversationMessage]) -> Result<()> {
        if messages.is_empty() {
            return Ok(());
        }
        if self.json {
            serde_json::to_writer_pretty(&mut *out, messages)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", render_transcript(messages, self.render_options()))?;
            writeln!(out)?;
        }
        Ok(())
    }
}
