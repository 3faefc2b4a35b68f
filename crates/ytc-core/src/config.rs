//! Configuration management for ytc

use crate::error::{Result, YtcError};
use crate::filter::{DEFAULT_SENSITIVE_KEYWORDS, DEFAULT_SPAM_KEYWORDS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter settings
    pub filter: FilterConfig,
    /// Threading settings
    pub threading: ThreadingConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Comment source settings
    pub source: SourceConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(YtcError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("Failed to parse {}", path.display())))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check for settings that would make the filter meaningless
    pub fn validate(&self) -> Result<()> {
        let overlap: Vec<&String> = self
            .filter
            .spam_keywords
            .iter()
            .filter(|k| self.filter.sensitive_keywords.contains(k))
            .collect();
        if !overlap.is_empty() {
            return Err(YtcError::Config(format!(
                "Keywords listed as both spam and sensitive: {:?}",
                overlap
            )));
        }
        Ok(())
    }
}

/// Keyword lists and heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Terms that mark a comment or author as spam
    pub spam_keywords: Vec<String>,
    /// Terms that reject comment text and are masked in author names
    pub sensitive_keywords: Vec<String>,
    /// Treat links in comment text as spam
    pub detect_urls: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            spam_keywords: DEFAULT_SPAM_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            sensitive_keywords: DEFAULT_SENSITIVE_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            detect_urls: true,
        }
    }
}

/// What to do with replies whose parent did not survive filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Leave them out of the forest
    #[default]
    Drop,
    /// Attach them at the top level
    Promote,
}

/// Threading configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadingConfig {
    pub orphan_policy: OrphanPolicy,
}

/// Time zone used to render comment timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayZone {
    /// Host local time
    #[default]
    Local,
    Utc,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON with 2-space indentation
    pub pretty: bool,
    /// Zone for the `datetime` field
    pub time_zone: DisplayZone,
    /// Directory for generated files when no path is given
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            time_zone: DisplayZone::Local,
            directory: PathBuf::from("."),
        }
    }
}

/// yt-dlp invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path or name of the yt-dlp binary
    pub ytdlp_path: String,
    /// Extra arguments appended before the URL
    pub extra_args: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            ytdlp_path: "yt-dlp".to_string(),
            extra_args: Vec::new(),
        }
    }
}
