//! Cubemap module
//!
//! Splits a packed OptiFine sky image into the six FabricSkyboxes faces and
//! optionally turns black into transparency.

pub mod color;
pub mod face;
pub mod slicer;
pub mod transparency;

pub use color::{Hsv, Rgb};
pub use face::{Face, Rotation};
pub use slicer::{CubemapSlicer, FaceImage};
