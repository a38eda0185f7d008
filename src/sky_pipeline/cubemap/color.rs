//! RGB <-> HSV conversion used for luminance chroma-keying.
//!
//! RGB channels are in `[0, 255]`. HSV uses hue in `[0, 360)` and saturation
//! and value in `[0, 100]`.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::EPSILON
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsv(self) -> Hsv {
        let r = self.r * 20.0 / 51.0;
        let g = self.g * 20.0 / 51.0;
        let b = self.b * 20.0 / 51.0;

        let max = r.max(g).max(b);
        let delta = max - r.min(g).min(b);

        // grey has no hue, and dividing by a zero delta would poison it with NaN
        let h = if approx_eq(delta, 0.0) {
            0.0
        } else if approx_eq(max, r) {
            (60.0 * ((g - b) / delta) + 360.0) % 360.0
        } else if approx_eq(max, g) {
            (60.0 * ((b - r) / delta) + 120.0) % 360.0
        } else {
            (60.0 * ((r - g) / delta) + 240.0) % 360.0
        };

        let s = if approx_eq(max, 0.0) {
            0.0
        } else {
            delta / max * 100.0
        };

        Hsv { h, s, v: max }
    }
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgb {
        let c = self.s * self.v / 10000.0;
        let x = c * (1.0 - ((self.h / 60.0) % 2.0 - 1.0).abs());
        let m = self.v / 100.0 - c;

        let (r, g, b) = if self.h < 60.0 {
            (c + m, x + m, m)
        } else if self.h < 120.0 {
            (x + m, c + m, m)
        } else if self.h < 180.0 {
            (m, c + m, x + m)
        } else if self.h < 240.0 {
            (m, x + m, c + m)
        } else if self.h < 300.0 {
            (x + m, m, c + m)
        } else {
            (c + m, m, x + m)
        };

        Rgb {
            r: r * 255.0,
            g: g * 255.0,
            b: b * 255.0,
        }
    }
}
