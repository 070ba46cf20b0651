//! Corpdesk configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpdeskConfig {
    /// Path to the corpus text file. Empty means "no corpus yet";
    /// the engine starts with an empty index.
    #[serde(default = "default_corpus_path")]
    pub corpus_path: String,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub answer: AnswerConfig,
}

fn default_corpus_path() -> String {
    String::new()
}

impl Default for CorpdeskConfig {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            retrieval: RetrievalConfig::default(),
            answer: AnswerConfig::default(),
        }
    }
}

impl CorpdeskConfig {
    /// Load config from the default path (~/.corpdesk/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::CorpdeskError::Config(format!("Failed to read config: {e}"))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            crate::error::CorpdeskError::Config(format!("Failed to parse config: {e}"))
        })?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::error::CorpdeskError::Config(format!("Failed to serialize config: {e}"))
        })?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the Corpdesk home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".corpdesk")
    }
}

/// Retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// How many chunks to retrieve per question.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    5
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: default_top_k() }
    }
}

/// Answer composition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Name of the company the corpus describes, used in answer headings.
    #[serde(default = "default_company_name")]
    pub company_name: String,
}

fn default_company_name() -> String {
    "the company".into()
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self { company_name: default_company_name() }
    }
}
