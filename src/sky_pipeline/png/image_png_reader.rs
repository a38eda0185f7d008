//! PNG reader implementation using the image library.
//!
//! Any color type the decoder understands is expanded to 8-bit RGBA so the
//! slicer only ever sees one pixel layout.

use tracing::debug;
use crate::sky_pipeline::common::error::{Result, ConversionError};
use crate::sky_pipeline::png::types::RasterImage;
use crate::sky_pipeline::png::reader::PngReader;

/// PNG reader that uses the image library for decoding.
pub struct ImagePngReader;

impl PngReader for ImagePngReader {
    fn read_png(&self, data: &[u8]) -> Result<RasterImage> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let decoded = image::load_from_memory_with_format(data, image::ImageFormat::Png)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?
            .into_rgba8();

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        debug!("Decoded image: {}x{}", width, height);

        RasterImage::new(width, height, decoded.into_raw())
    }
}
