//! Run configuration for the command-line converter.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::sky_pipeline::ConversionConfig;
use crate::sky_pipeline::conversions::DEFAULT_NAMESPACE;

/// Config file looked up in the working directory when no arguments are given.
pub const CONFIG_FILE: &str = "sky-convert.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunConfig {
    /// Directories whose entries are resource packs
    pub paths: Vec<PathBuf>,
    pub fsb_transparent: bool,
    pub auto_reconvert: bool,
    pub namespace: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            fsb_transparent: true,
            auto_reconvert: false,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl RunConfig {
    /// Whole-line `//` comments are allowed and skipped.
    pub fn from_json(text: &str) -> Result<Self> {
        let json = text
            .lines()
            .filter(|line| !line.trim_start().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");
        serde_json::from_str(&json).context("invalid configuration JSON")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Command-line arguments are joined with spaces and parsed as one JSON
    /// document; without arguments [`CONFIG_FILE`] is read instead.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let joined = args.into_iter().collect::<Vec<_>>().join(" ");
        if joined.trim().is_empty() {
            Self::load(CONFIG_FILE)
        } else {
            Self::from_json(&joined)
        }
    }

    pub fn conversion_config(&self) -> ConversionConfig {
        ConversionConfig::builder()
            .transparent(self.fsb_transparent)
            .reconvert(self.auto_reconvert)
            .namespace(self.namespace.clone())
            .build()
    }
}
