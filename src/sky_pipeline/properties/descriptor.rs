//! FabricSkyboxes `square-textured` descriptor (schema version 2).

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::sky_pipeline::common::error::Result;
use crate::sky_pipeline::cubemap::Face;

pub const SCHEMA_VERSION: u32 = 2;
pub const SKY_TYPE: &str = "square-textured";
pub const DEFAULT_WORLD: &str = "minecraft:overworld";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyDescriptor {
    pub schema_version: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub conditions: Conditions,
    pub blend: bool,
    pub properties: SkyProperties,
    pub textures: Textures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub worlds: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biomes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heights: Option<Vec<HeightRange>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyProperties {
    pub blend: Blend,
    pub rotation: Rotation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_rotate: Option<bool>,
    pub fade: Fade,
    pub sun_sky_tint: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blend {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    pub axis: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_speed: Option<f64>,
    #[serde(rename = "static")]
    pub static_axis: [f64; 3],
}

/// Fade keyframes in ticks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_fade_in: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_fade_in: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_fade_out: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_fade_out: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Textures {
    pub top: String,
    pub bottom: String,
    pub north: String,
    pub south: String,
    pub east: String,
    pub west: String,
}

impl Textures {
    /// `<resource_id>_<face>.png` for every face.
    pub fn from_resource_id(resource_id: &str) -> Self {
        let id = |face: Face| face.file_name(resource_id);
        Self {
            top: id(Face::Top),
            bottom: id(Face::Bottom),
            north: id(Face::North),
            south: id(Face::South),
            east: id(Face::East),
            west: id(Face::West),
        }
    }
}

impl Default for SkyDescriptor {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            kind: SKY_TYPE.to_string(),
            conditions: Conditions {
                worlds: vec![DEFAULT_WORLD.to_string()],
                weather: None,
                biomes: None,
                heights: None,
            },
            blend: true,
            properties: SkyProperties {
                blend: Blend { kind: "add".to_string() },
                rotation: Rotation {
                    axis: [0.0, 180.0, 0.0],
                    rotation_speed: None,
                    static_axis: [1.0, 1.0, 1.0],
                },
                should_rotate: None,
                fade: Fade::default(),
                sun_sky_tint: false,
            },
            textures: Textures::default(),
        }
    }
}

impl SkyDescriptor {
    /// Writes tab-indented JSON followed by a newline.
    pub fn write_json(&self, output: &mut dyn Write) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut *output, formatter);
        self.serialize(&mut serializer)?;
        output.write_all(b"\n")?;
        Ok(())
    }
}
