use std::io::Write;
use crate::sky_pipeline::common::error::Result;
use crate::sky_pipeline::png::types::RasterImage;

pub trait PngWriter {
    fn write_png(&self, image: &RasterImage, output: &mut dyn Write) -> Result<()>;
}
