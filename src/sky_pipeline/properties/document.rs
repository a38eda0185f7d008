use std::path::Path;

use crate::sky_pipeline::common::error::{ConversionError, Result};

/// One `option=value` line, both sides trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyLine {
    pub option: String,
    pub value: String,
}

/// The meaningful lines of a `.properties` file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesDocument {
    lines: Vec<PropertyLine>,
}

impl PropertiesDocument {
    /// Splits each line on its first `=`. Blank lines and `#`/`!` comments
    /// are dropped; a line without `=` keeps an empty value.
    pub fn parse(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
            .map(|line| {
                let (option, value) = line.split_once('=').unwrap_or((line, ""));
                PropertyLine {
                    option: option.trim().to_string(),
                    value: value.trim().to_string(),
                }
            })
            .collect();
        Self { lines }
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        // Packs are often Latin-1; only the ASCII keys and values matter.
        let bytes = std::fs::read(path).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    pub fn lines(&self) -> &[PropertyLine] {
        &self.lines
    }
}
