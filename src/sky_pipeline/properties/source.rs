//! Resolution of a `source=` value to the packed image on disk and to the
//! texture resource id the descriptor should reference.

use std::path::{Component, Path, PathBuf};

use crate::sky_pipeline::common::error::{ConversionError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    /// `<namespace>:sky<folder><stem>`, without a face suffix
    pub resource_id: String,
    /// Packed cubemap to slice
    pub image_path: PathBuf,
    /// Folder below the target `sky` directory, always starting and ending with `/`
    pub folder: String,
    /// File stem the six face images are named after
    pub stem: String,
}

impl ResolvedSource {
    /// `source` is the configured value with its extension already stripped.
    /// `./`-prefixed values are relative to the properties file; anything
    /// else is relative to the pack root and must contain a `/`.
    ///
    /// Sources that climb out with `..` are rejected.
    pub fn resolve(source: &str, properties_dir: &Path, pack_root: &Path, namespace: &str) -> Result<Self> {
        if Path::new(source).components().any(|c| c == Component::ParentDir) {
            return Err(ConversionError::MalformedInput(format!(
                "source \"{source}\" leaves the pack"
            )));
        }

        let (folder, stem, image_path) = if let Some(relative) = source.strip_prefix("./") {
            let (folder, stem) = match relative.rfind('/') {
                Some(idx) => (format!("/{}", &relative[..=idx]), &relative[idx + 1..]),
                None => ("/".to_string(), relative),
            };
            (folder, stem, properties_dir.join(format!("{relative}.png")))
        } else {
            let idx = source.rfind('/').ok_or_else(|| {
                ConversionError::MalformedInput(format!("source \"{source}\" does not contain a /"))
            })?;
            let folder = &source[..=idx];
            let folder = if folder.starts_with('/') {
                folder.to_string()
            } else {
                format!("/{folder}")
            };
            let image_path = pack_root.join(format!("{}.png", source.trim_start_matches('/')));
            (folder, &source[idx + 1..], image_path)
        };

        if stem.is_empty() {
            return Err(ConversionError::MalformedInput(format!(
                "source \"{source}\" does not name a file"
            )));
        }

        Ok(Self {
            resource_id: format!("{namespace}:sky{folder}{stem}"),
            image_path,
            folder,
            stem: stem.to_string(),
        })
    }

    /// Directory the face images go in, given the target `assets/<namespace>/sky` directory.
    pub fn image_dir(&self, sky_dir: &Path) -> PathBuf {
        sky_dir.join(self.folder.trim_start_matches('/'))
    }
}
