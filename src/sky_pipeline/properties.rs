//! OptiFine sky properties module
//!
//! This module reads `skyN.properties` files and maps them onto the
//! FabricSkyboxes JSON descriptor.

pub mod descriptor;
pub mod document;
pub mod mapper;
pub mod source;
pub mod ticks;

pub use descriptor::SkyDescriptor;
pub use document::PropertiesDocument;
pub use mapper::{MappedSky, PropertiesMapper};
pub use source::ResolvedSource;
