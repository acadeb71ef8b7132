//! Exporter configuration (rad-export.toml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "rad-export.toml";

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: FormatConfig,
}

/// External Go formatter settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FormatConfig {
    /// Run the formatter at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Program that reads Go source on stdin and writes it formatted to stdout
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_command() -> String {
    "gofmt".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_command(),
            args: Vec::new(),
        }
    }
}

impl ExportConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: ExportConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// An explicit path must exist; otherwise `rad-export.toml` in `dir` is used when present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("Using config {}", candidate.display());
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
