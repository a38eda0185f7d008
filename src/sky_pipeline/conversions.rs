//! Pipeline conversions module
//!
//! This module contains the configuration, pack detection and orchestration
//! logic for converting OptiFine skies to FabricSkyboxes.

mod types;
mod pack;
mod optifine_to_fsb;

#[cfg(test)]
mod tests;

pub use types::{ConversionConfig, ConversionConfigBuilder, DEFAULT_NAMESPACE};
pub use pack::{PackLayout, SkyFormat};
pub use optifine_to_fsb::{BatchReport, ConvertedSky, FaceSetOutcome, OptifineToFsbPipeline, PLACEHOLDER_PIXEL};
