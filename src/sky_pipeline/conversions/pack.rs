use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::sky_pipeline::common::error::{ConversionError, Result};
use crate::sky_pipeline::conversions::types::ConversionConfig;

/// Where a pack keeps its custom skies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyFormat {
    Optifine,
    Mcpatcher,
}

impl SkyFormat {
    fn folder(self) -> &'static str {
        match self {
            SkyFormat::Optifine => "optifine",
            SkyFormat::Mcpatcher => "mcpatcher",
        }
    }
}

/// An unpacked resource pack with skies to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackLayout {
    pub root: PathBuf,
    pub format: SkyFormat,
}

impl PackLayout {
    /// Returns `None` when the pack has no skies or was already converted
    /// (unless `config.reconvert` is set, in which case the old output is removed).
    pub fn detect<P: AsRef<Path>>(root: P, config: &ConversionConfig) -> Result<Option<Self>> {
        let root = root.as_ref();
        let name = root.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();

        if Self::target_sky_dir(root, &config.namespace).is_dir() {
            if !config.reconvert {
                info!("{} folder found in {}, skipping", config.namespace, name);
                return Ok(None);
            }
            info!("Reconverting {}", name);
            let target = root.join("assets").join(&config.namespace);
            std::fs::remove_dir_all(&target).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", target.display(), e))
            })?;
        }

        for format in [SkyFormat::Optifine, SkyFormat::Mcpatcher] {
            let layout = Self {
                root: root.to_path_buf(),
                format,
            };
            if layout.sky_dir().is_dir() {
                return Ok(Some(layout));
            }
        }

        info!("Nothing to convert in {}, skipping", name);
        Ok(None)
    }

    /// `assets/minecraft/<optifine|mcpatcher>/sky`
    pub fn sky_dir(&self) -> PathBuf {
        self.root
            .join("assets")
            .join("minecraft")
            .join(self.format.folder())
            .join("sky")
    }

    /// `assets/<namespace>/sky`
    pub fn target_sky_dir(root: &Path, namespace: &str) -> PathBuf {
        root.join("assets").join(namespace).join("sky")
    }

    /// Overworld `.properties` files, sorted by name.
    pub fn properties_files(&self) -> Result<Vec<PathBuf>> {
        let world_dir = self.sky_dir().join("world0");
        if !world_dir.is_dir() {
            warn!("No world0 folder in {}", self.sky_dir().display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&world_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "properties") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
