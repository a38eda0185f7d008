use crate::sky_pipeline::common::error::Result;
use crate::sky_pipeline::png::types::RasterImage;

pub trait PngReader {
    fn read_png(&self, data: &[u8]) -> Result<RasterImage>;
}
