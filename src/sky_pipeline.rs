//! Sky conversion pipeline module
//!
//! This module converts OptiFine/MCPatcher custom skies (one packed cubemap
//! image plus a `.properties` file) into the FabricSkyboxes layout (six
//! per-face PNGs plus a JSON descriptor), with separate modules for PNG
//! handling, cubemap slicing, properties mapping, and conversion orchestration.

pub mod common;
pub mod png;
pub mod cubemap;
pub mod properties;
pub mod conversions;

pub use common::{
    ConversionError,
    Result,
};

pub use png::{
    RasterImage,
    PngReader,
    PngWriter,
    ImagePngReader,
    StandardPngWriter,
};

pub use cubemap::{
    CubemapSlicer,
    Face,
    FaceImage,
    Hsv,
    Rgb,
    Rotation,
};

pub use properties::{
    PropertiesDocument,
    PropertiesMapper,
    MappedSky,
    ResolvedSource,
    SkyDescriptor,
};

pub use conversions::{
    BatchReport,
    ConversionConfig,
    ConversionConfigBuilder,
    ConvertedSky,
    FaceSetOutcome,
    OptifineToFsbPipeline,
    PackLayout,
};
