use std::path::Path;

use tracing::{debug, instrument};

use crate::sky_pipeline::common::error::{ConversionError, Result};
use crate::sky_pipeline::properties::descriptor::{HeightRange, SkyDescriptor, Textures};
use crate::sky_pipeline::properties::document::PropertiesDocument;
use crate::sky_pipeline::properties::source::ResolvedSource;
use crate::sky_pipeline::properties::ticks::{self, TICKS_PER_DAY};

/// Sentinel used for fade ticks the file never set.
const UNSET_TICK: i32 = -1;

/// A fully mapped properties file, ready to be written.
#[derive(Debug, Clone)]
pub struct MappedSky {
    /// Properties file stem; the descriptor is written as `<name>.json`
    pub name: String,
    pub descriptor: SkyDescriptor,
    pub source: ResolvedSource,
}

pub struct PropertiesMapper {
    namespace: String,
}

impl PropertiesMapper {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Maps a document read from `properties_path`, resolving its source
    /// image against the properties directory or `pack_root`.
    #[instrument(skip_all, fields(path = %properties_path.display()))]
    pub fn map(&self, document: &PropertiesDocument, properties_path: &Path, pack_root: &Path) -> Result<MappedSky> {
        let name = properties_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ConversionError::MalformedInput(format!("{} has no file name", properties_path.display()))
            })?;
        let properties_dir = properties_path.parent().unwrap_or(Path::new(""));

        let (mut descriptor, source) = self.map_fields(document, &name)?;
        let source = ResolvedSource::resolve(&source, properties_dir, pack_root, &self.namespace)?;
        descriptor.textures = Textures::from_resource_id(&source.resource_id);

        Ok(MappedSky {
            name,
            descriptor,
            source,
        })
    }

    /// Scans every line into a finalized descriptor (textures left empty) and
    /// returns it with the raw `source` value, extension stripped.
    pub fn map_fields(&self, document: &PropertiesDocument, default_source: &str) -> Result<(SkyDescriptor, String)> {
        let mut descriptor = SkyDescriptor::default();
        let mut source = default_source.to_string();

        for line in document.lines() {
            let (option, value) = (line.option.as_str(), line.value.as_str());
            match option {
                "source" => source = strip_extension(value)?.to_string(),
                "startFadeIn" | "endFadeIn" | "startFadeOut" | "endFadeOut" => {
                    let tick = ticks::encode(value).map_err(|_| ConversionError::parse(option, value))?;
                    let fade = &mut descriptor.properties.fade;
                    let slot = match option {
                        "startFadeIn" => &mut fade.start_fade_in,
                        "endFadeIn" => &mut fade.end_fade_in,
                        "startFadeOut" => &mut fade.start_fade_out,
                        _ => &mut fade.end_fade_out,
                    };
                    *slot = Some(tick);
                }
                "blend" => descriptor.properties.blend.kind = value.to_string(),
                "rotate" => descriptor.properties.should_rotate = Some(value == "true"),
                "speed" => {
                    descriptor.properties.rotation.rotation_speed = Some(parse_number(option, value)?);
                }
                "axis" => descriptor.properties.rotation.axis = parse_axis(value)?,
                "weather" => descriptor.conditions.weather = Some(split_list(value)),
                "biomes" => descriptor.conditions.biomes = Some(split_list(value)),
                "heights" => descriptor.conditions.heights = Some(parse_heights(value)?),
                "transition" => debug!("`transition` has no FabricSkyboxes equivalent, ignoring"),
                _ => debug!(option, "Ignoring unknown option"),
            }
        }

        finalize(&mut descriptor);
        Ok((descriptor, source))
    }
}

fn finalize(descriptor: &mut SkyDescriptor) {
    descriptor.properties.rotation.static_axis = [1.0, 1.0, 1.0];

    let fade = &mut descriptor.properties.fade;
    if fade.start_fade_out.is_none() {
        // Missing fade keys fall through as the -1 sentinel; the result is
        // meaningless for such files but matches what existing converters emit.
        let start_fade_in = fade.start_fade_in.unwrap_or(UNSET_TICK);
        let end_fade_in = fade.end_fade_in.unwrap_or(UNSET_TICK);
        let end_fade_out = fade.end_fade_out.unwrap_or(UNSET_TICK);
        let ticks_per_day = TICKS_PER_DAY as i32;
        fade.start_fade_out = Some((end_fade_out - end_fade_in + start_fade_in + ticks_per_day) % ticks_per_day);
    }
}

/// Drops the four-character extension (`.png`).
fn strip_extension(value: &str) -> Result<&str> {
    value
        .char_indices()
        .rev()
        .nth(3)
        .map(|(idx, _)| &value[..idx])
        .ok_or_else(|| ConversionError::MalformedInput(format!("source \"{value}\" is too short")))
}

fn parse_number(option: &str, value: &str) -> Result<f64> {
    value.parse().map_err(|_| ConversionError::parse(option, value))
}

fn parse_axis(value: &str) -> Result<[f64; 3]> {
    let mut components = value.split_whitespace();
    let mut axis = [0.0; 3];
    for component in &mut axis {
        let token = components.next().unwrap_or_default();
        *component = parse_number("axis", token)? * 180.0;
    }
    Ok(axis)
}

fn split_list(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

/// `a-b` is one range; chained bounds `a-b-c` give `a-b` and `b-c`.
fn parse_heights(value: &str) -> Result<Vec<HeightRange>> {
    let mut heights = Vec::new();
    for token in value.split_whitespace() {
        let bounds: Vec<&str> = token.split('-').collect();
        for pair in bounds.windows(2) {
            heights.push(HeightRange {
                min: parse_number("heights", pair[0])?,
                max: parse_number("heights", pair[1])?,
            });
        }
    }
    Ok(heights)
}
