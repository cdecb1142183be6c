//! Assistant configuration.
//!
//! Config file: ~/.config/flood-assistant/config.toml or
//! /etc/flood-assistant/config.toml, overridable with FLOOD_ASSISTANT_CONFIG.

use crate::error::{AssistantError, Result};
use crate::knowledge::{KnowledgeBase, WELCOME_MESSAGE};
use crate::scheduler::DEFAULT_REPLY_DELAY_MS;
use crate::session::SessionOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "FLOOD_ASSISTANT_CONFIG";

/// Color display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// How answer markup is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    /// Convert `<br>` to line breaks and drop other tags
    #[default]
    Plain,
    /// Print answer bodies as stored
    Raw,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantSection {
    /// Delay before an assistant reply is appended
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Greeting override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome: Option<String>,
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

impl Default for AssistantSection {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            welcome: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeSection {
    /// External knowledge document (TOML or JSON); embedded FAQ when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub color: ColorMode,
    #[serde(default)]
    pub markup: MarkupMode,
}

/// Main assistant configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub assistant: AssistantSection,
    #[serde(default)]
    pub knowledge: KnowledgeSection,
    #[serde(default)]
    pub output: OutputSection,
}

impl AssistantConfig {
    /// ~/.config/flood-assistant/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let config_dir = match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let home = std::env::var("HOME").map_err(|_| {
                    AssistantError::Config("Cannot determine home directory".to_string())
                })?;
                Path::new(&home).join(".config")
            }
        };
        Ok(config_dir.join("flood-assistant").join("config.toml"))
    }

    /// /etc/flood-assistant/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/flood-assistant/config.toml")
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| AssistantError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. Explicit path
    /// 2. FLOOD_ASSISTANT_CONFIG
    /// 3. User config
    /// 4. System config
    /// 5. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Self::from_file(Path::new(&path));
            }
        }

        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                debug!(path = %user_path.display(), "using user config");
                return Self::from_file(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            debug!(path = %system_path.display(), "using system config");
            return Self::from_file(&system_path);
        }

        Ok(Self::default())
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| AssistantError::Config(format!("Failed to serialize configuration: {}", e)))?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Save to the user config file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::user_config_path()?)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.assistant.reply_delay_ms)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            reply_delay: self.reply_delay(),
            welcome: self
                .assistant
                .welcome
                .clone()
                .unwrap_or_else(|| WELCOME_MESSAGE.to_string()),
        }
    }

    /// Load the configured knowledge document, or the embedded FAQ.
    pub fn load_knowledge(&self) -> Result<KnowledgeBase> {
        match &self.knowledge.path {
            Some(path) => KnowledgeBase::load(path),
            None => KnowledgeBase::builtin(),
        }
    }
}
