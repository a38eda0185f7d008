use tracing::{debug, warn};

use crate::sky_pipeline::common::error::{ConversionError, Result};
use crate::sky_pipeline::cubemap::face::{Face, Rotation};
use crate::sky_pipeline::cubemap::transparency;
use crate::sky_pipeline::png::RasterImage;
use crate::sky_pipeline::png::types::CHANNELS;

/// One cut-out, oriented face of a cubemap.
#[derive(Debug, Clone)]
pub struct FaceImage {
    pub face: Face,
    pub image: RasterImage,
}

/// Cuts an OptiFine-style 3x2 packed sky into six FabricSkyboxes faces.
pub struct CubemapSlicer {
    transparent: bool,
}

impl CubemapSlicer {
    pub fn new(transparent: bool) -> Self {
        Self { transparent }
    }

    /// Returns the faces in [`Face::TILE_ORDER`].
    ///
    /// Sizes that are not a multiple of 3x2 are cropped on the right and
    /// bottom edges. Images too small to hold a single pixel per tile are
    /// rejected.
    pub fn slice(&self, image: &RasterImage) -> Result<Vec<FaceImage>> {
        if image.width % 3 != 0 || image.height % 2 != 0 {
            warn!(
                "Wrong dimensions {}x{}, will be cropped to {}x{}",
                image.width,
                image.height,
                image.width / 3 * 3,
                image.height / 2 * 2
            );
        }

        let tile_width = image.width / 3;
        let tile_height = image.height / 2;
        if tile_width == 0 || tile_height == 0 {
            return Err(ConversionError::InvalidDimensions(image.width, image.height));
        }

        debug!("Slicing {}x{} into {}x{} tiles", image.width, image.height, tile_width, tile_height);

        let faces = Face::TILE_ORDER
            .iter()
            .map(|&face| {
                let (column, row) = face.tile();
                let mut tile = crop(image, column * tile_width, row * tile_height, tile_width, tile_height);
                transparency::apply(&mut tile, self.transparent);
                let image = match face.rotation() {
                    Rotation::None => tile,
                    Rotation::Clockwise => rotate_clockwise(&tile),
                    Rotation::CounterClockwise => rotate_counter_clockwise(&tile),
                };
                FaceImage { face, image }
            })
            .collect();

        Ok(faces)
    }
}

/// Copies the `width` x `height` rectangle whose top-left corner is `(x0, y0)`.
pub fn crop(image: &RasterImage, x0: usize, y0: usize, width: usize, height: usize) -> RasterImage {
    assert!(x0 + width <= image.width && y0 + height <= image.height);

    let row_bytes = width * CHANNELS;
    let mut data = Vec::with_capacity(row_bytes * height);
    for y in y0..y0 + height {
        let start = (y * image.width + x0) * CHANNELS;
        data.extend_from_slice(&image.data[start..start + row_bytes]);
    }
    RasterImage { width, height, data }
}

/// Source `(x, y)` lands on `(h - 1 - y, x)`.
pub fn rotate_clockwise(image: &RasterImage) -> RasterImage {
    let (w, h) = (image.width, image.height);
    let mut rotated = RasterImage::filled(h, w, [0; 4]);
    for y in 0..h {
        for x in 0..w {
            rotated.set_pixel(h - 1 - y, x, image.pixel(x, y));
        }
    }
    rotated
}

/// Source `(x, y)` lands on `(y, w - 1 - x)`.
pub fn rotate_counter_clockwise(image: &RasterImage) -> RasterImage {
    let (w, h) = (image.width, image.height);
    let mut rotated = RasterImage::filled(h, w, [0; 4]);
    for y in 0..h {
        for x in 0..w {
            rotated.set_pixel(y, w - 1 - x, image.pixel(x, y));
        }
    }
    rotated
}
