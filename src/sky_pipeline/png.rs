//! PNG handling module
//!
//! This module provides the RGBA raster type and the PNG codec seams used by
//! the slicer and the orchestrator.

mod reader;
mod writer;
mod image_png_reader;
mod standard_png_writer;
pub mod types;

pub use reader::PngReader;
pub use writer::PngWriter;
pub use image_png_reader::ImagePngReader;
pub use standard_png_writer::StandardPngWriter;
pub use types::RasterImage;
