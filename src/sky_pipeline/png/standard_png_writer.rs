use std::io::{Cursor, Write};
use tracing::debug;
use crate::sky_pipeline::common::error::{Result, ConversionError};
use crate::sky_pipeline::png::types::RasterImage;
use crate::sky_pipeline::png::writer::PngWriter;

pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(&self, image: &RasterImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);

        let buffer = image::RgbaImage::from_raw(
            image.width as u32,
            image.height as u32,
            image.data.clone(),
        )
        .ok_or(ConversionError::InvalidDimensions(image.width, image.height))?;

        let mut encoded = Cursor::new(Vec::new());
        buffer
            .write_to(&mut encoded, image::ImageFormat::Png)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(encoded.get_ref())?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
