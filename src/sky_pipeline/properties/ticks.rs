//! Time-of-day strings to FabricSkyboxes ticks.
//!
//! OptiFine writes times as `HH:MM` (optionally with `\:` escapes). The digits
//! are concatenated rather than combined arithmetically, so `6:0` and `60:0`
//! do not mean what a clock would say. Existing packs rely on this.

use crate::sky_pipeline::common::error::{ConversionError, Result};

pub const TICKS_PER_DAY: i64 = 24000;

/// Ticks between midnight and the start of the Minecraft day (06:00).
const DAY_START_OFFSET: i64 = 18000;

pub fn encode(token: &str) -> Result<i32> {
    let mut digits: String = token.replace("\\:", ":").chars().filter(|&c| c != ':').collect();
    digits.push('0');

    // out-of-range values are rejected like any other bad number
    let raw = i64::from(
        digits
            .parse::<i32>()
            .map_err(|_| ConversionError::parse("time", digits.clone()))?,
    );

    let ticks = raw / 1000 * 1000 + ((raw % 1000) as f64 / 3.0 * 5.0).round() as i64;
    Ok((ticks + DAY_START_OFFSET).rem_euclid(TICKS_PER_DAY) as i32)
}
