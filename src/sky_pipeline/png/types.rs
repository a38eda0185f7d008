//! Raster image types

use crate::sky_pipeline::common::error::{ConversionError, Result};

/// Number of bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Decoded RGBA8 image, row-major, top row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved pixel data [R, G, B, A, R, G, B, A, ...]
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Wraps an existing buffer, rejecting buffers whose length is not `width * height * 4`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height * CHANNELS {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        Ok(Self { width, height, data })
    }

    /// Creates an image where every pixel has the same RGBA value.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        Self {
            width,
            height,
            data: rgba.repeat(width * height),
        }
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) outside {}x{}", self.width, self.height);
        (y * self.width + x) * CHANNELS
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }
}
