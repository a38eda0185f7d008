//! Sky conversion configuration types

/// Namespace FabricSkyboxes reads sky descriptors and textures from.
pub const DEFAULT_NAMESPACE: &str = "fabricskyboxes";

/// Configuration for OptiFine to FabricSkyboxes conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Turn opaque black into transparency when slicing faces
    pub transparent: bool,
    /// Delete and regenerate packs that already contain converted skies
    pub reconvert: bool,
    /// Target asset namespace (`assets/<namespace>/sky`)
    pub namespace: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            transparent: true,
            reconvert: false,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    transparent: Option<bool>,
    reconvert: Option<bool>,
    namespace: Option<String>,
}

impl ConversionConfigBuilder {
    pub fn transparent(mut self, enable: bool) -> Self {
        self.transparent = Some(enable);
        self
    }

    pub fn reconvert(mut self, enable: bool) -> Self {
        self.reconvert = Some(enable);
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            transparent: self.transparent.unwrap_or(default.transparent),
            reconvert: self.reconvert.unwrap_or(default.reconvert),
            namespace: self.namespace.unwrap_or(default.namespace),
        }
    }
}
