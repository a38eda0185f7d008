//! Luminance chroma-key: opaque pixels become as transparent as they are dark.

use crate::sky_pipeline::cubemap::color::Rgb;
use crate::sky_pipeline::png::RasterImage;

/// Rewrites one RGBA pixel. Pixels that already carry transparency are left alone.
pub fn key_pixel(pixel: &mut [u8]) {
    if pixel[3] != u8::MAX {
        return;
    }

    let mut hsv = Rgb::new(pixel[0] as f64, pixel[1] as f64, pixel[2] as f64).to_hsv();
    let alpha = hsv.v * 51.0 / 20.0;
    hsv.v = 100.0;
    let rgb = hsv.to_rgb();

    // truncating casts, matching how the packs were originally converted
    pixel[0] = rgb.r as u8;
    pixel[1] = rgb.g as u8;
    pixel[2] = rgb.b as u8;
    pixel[3] = alpha as u8;
}

/// Applies [`key_pixel`] to every pixel when `enabled`, otherwise does nothing.
pub fn apply(image: &mut RasterImage, enabled: bool) {
    if !enabled {
        return;
    }
    for pixel in image.pixels_mut() {
        key_pixel(pixel);
    }
}
