use tracing::{error, info, instrument, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::sky_pipeline::{
    common::error::{ConversionError, Result},
    conversions::{ConversionConfig, PackLayout},
    cubemap::{CubemapSlicer, Face, FaceImage},
    png::{ImagePngReader, PngReader, PngWriter, RasterImage, StandardPngWriter},
    properties::{PropertiesDocument, PropertiesMapper, SkyDescriptor},
};

/// Pixel used for every face when the source image is missing. FabricSkyboxes
/// draws black as background, so the sky simply does not show.
pub const PLACEHOLDER_PIXEL: [u8; 4] = [0, 0, 0, 255];

/// What happened to the face images of one properties file.
#[derive(Debug)]
pub enum FaceSetOutcome {
    Sliced,
    Placeholder,
    Failed(ConversionError),
}

#[derive(Debug)]
pub struct ConvertedSky {
    pub name: String,
    pub descriptor_path: PathBuf,
    pub faces: FaceSetOutcome,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedSky>,
    pub failed: Vec<(PathBuf, ConversionError)>,
}

pub struct OptifineToFsbPipeline<R: PngReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl OptifineToFsbPipeline<ImagePngReader, StandardPngWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: ImagePngReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: PngReader, W: PngWriter> OptifineToFsbPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Detects the pack layout and converts every overworld sky in it.
    /// Returns `None` when there is nothing to convert.
    #[instrument(skip_all, fields(pack = %pack_root.as_ref().display()))]
    pub fn convert_pack<P: AsRef<Path>>(&self, pack_root: P) -> Result<Option<BatchReport>> {
        let pack_root = pack_root.as_ref();
        let Some(layout) = PackLayout::detect(pack_root, &self.config)? else {
            return Ok(None);
        };

        info!("Converting pack {}", pack_root.display());
        let files = layout.properties_files()?;
        Ok(Some(self.convert_batch(pack_root, &files)))
    }

    /// Converts each file independently; a failing file never stops the rest.
    pub fn convert_batch(&self, pack_root: &Path, properties_files: &[PathBuf]) -> BatchReport {
        let mut report = BatchReport::default();
        for path in properties_files {
            match self.convert_properties_file(pack_root, path) {
                Ok(converted) => report.converted.push(converted),
                Err(e) => {
                    error!(file = %path.display(), "Conversion failed: {}", e);
                    report.failed.push((path.clone(), e));
                }
            }
        }
        info!(
            converted = report.converted.len(),
            failed = report.failed.len(),
            "Batch complete"
        );
        report
    }

    /// Converts one `.properties` file and the image it references.
    ///
    /// Mapping errors abort before anything is written. Image errors are
    /// reported in [`FaceSetOutcome::Failed`] and the descriptor is still written.
    #[instrument(skip_all, fields(file = %properties_path.display()))]
    pub fn convert_properties_file(&self, pack_root: &Path, properties_path: &Path) -> Result<ConvertedSky> {
        info!("Converting {}", properties_path.display());

        let mapped = {
            let _span = tracing::info_span!("map_properties").entered();
            let document = PropertiesDocument::read(properties_path)?;
            PropertiesMapper::new(self.config.namespace.as_str()).map(&document, properties_path, pack_root)?
        };

        let sky_dir = PackLayout::target_sky_dir(pack_root, &self.config.namespace);
        let image_dir = mapped.source.image_dir(&sky_dir);
        create_dir(&image_dir)?;

        let faces = if mapped.source.image_path.is_file() {
            match self.convert_image_file(&mapped.source.image_path, &image_dir, &mapped.source.stem) {
                Ok(()) => FaceSetOutcome::Sliced,
                Err(e) => {
                    error!(image = %mapped.source.image_path.display(), "Face conversion failed: {}", e);
                    FaceSetOutcome::Failed(e)
                }
            }
        } else {
            warn!("File not found: {}", mapped.source.image_path.display());
            self.write_placeholders(&image_dir, &mapped.source.stem)?;
            FaceSetOutcome::Placeholder
        };

        let descriptor_path = sky_dir.join(format!("{}.json", mapped.name));
        {
            let _span = tracing::info_span!("write_descriptor").entered();
            write_descriptor(&mapped.descriptor, &descriptor_path)?;
        }

        Ok(ConvertedSky {
            name: mapped.name,
            descriptor_path,
            faces,
        })
    }

    /// Decodes a packed cubemap and slices it into oriented faces.
    pub fn convert_image(&self, input_data: &[u8]) -> Result<Vec<FaceImage>> {
        let image = {
            let _span = tracing::info_span!("decode_png").entered();
            self.reader.read_png(input_data)?
        };

        let _span = tracing::info_span!("slice_cubemap", width = image.width, height = image.height).entered();
        CubemapSlicer::new(self.config.transparent).slice(&image)
    }

    fn convert_image_file(&self, image_path: &Path, image_dir: &Path, stem: &str) -> Result<()> {
        let input_data = std::fs::read(image_path).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", image_path.display(), e))
        })?;

        let faces = self.convert_image(&input_data)?;

        let _span = tracing::info_span!("encode_faces").entered();
        for FaceImage { face, image } in &faces {
            self.write_face(&image_dir.join(face.file_name(stem)), image)?;
        }
        Ok(())
    }

    fn write_placeholders(&self, image_dir: &Path, stem: &str) -> Result<()> {
        let placeholder = RasterImage::filled(1, 1, PLACEHOLDER_PIXEL);
        for face in Face::TEXTURE_ORDER {
            self.write_face(&image_dir.join(face.file_name(stem)), &placeholder)?;
        }
        Ok(())
    }

    fn write_face(&self, path: &Path, image: &RasterImage) -> Result<()> {
        let mut output = File::create(path).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        self.writer.write_png(image, &mut output)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

/// An already existing directory counts as success.
fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        ConversionError::OutputWriteError(format!("{}: {}", dir.display(), e))
    })
}

fn write_descriptor(descriptor: &SkyDescriptor, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        ConversionError::OutputWriteError(format!("{}: {}", path.display(), e))
    })?;
    let mut output = BufWriter::new(file);
    descriptor.write_json(&mut output)?;
    output.flush()?;
    Ok(())
}
