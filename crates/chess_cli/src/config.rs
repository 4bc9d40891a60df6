//! Settings file for the terminal front-end.

use anyhow::{Context, Result};
use chess_rules::Glyphs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "chess.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub white_name: String,
    pub black_name: String,
    /// Chess glyphs instead of letters in the diagram
    pub unicode: bool,
    /// Where to write the JSON game record, if anywhere
    pub record_path: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            white_name: "Player 1".to_string(),
            black_name: "Player 2".to_string(),
            unicode: true,
            record_path: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Reads `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Reads `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Command-line values win over the file.
    pub fn with_overrides(
        mut self,
        white: Option<String>,
        black: Option<String>,
        ascii: bool,
        record: Option<PathBuf>,
    ) -> Self {
        if let Some(name) = white {
            self.white_name = name;
        }
        if let Some(name) = black {
            self.black_name = name;
        }
        if ascii {
            self.unicode = false;
        }
        if record.is_some() {
            self.record_path = record;
        }
        self
    }

    pub fn glyphs(&self) -> Glyphs {
        if self.unicode {
            Glyphs::Unicode
        } else {
            Glyphs::Ascii
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
