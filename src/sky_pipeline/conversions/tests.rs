#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use crate::sky_pipeline::common::error::{ConversionError, Result};
    use crate::sky_pipeline::conversions::{
        ConversionConfig, FaceSetOutcome, OptifineToFsbPipeline, PackLayout, SkyFormat, PLACEHOLDER_PIXEL,
    };
    use crate::sky_pipeline::png::{ImagePngReader, PngReader, PngWriter, RasterImage, StandardPngWriter};
    use crate::sky_pipeline::properties::SkyDescriptor;

    struct MockReader {
        should_fail: bool,
        mock_data: Option<RasterImage>,
    }

    impl PngReader for MockReader {
        fn read_png(&self, _data: &[u8]) -> Result<RasterImage> {
            if self.should_fail {
                return Err(ConversionError::DecodeError("Mock decode error".to_string()));
            }
            Ok(self.mock_data.clone().unwrap_or(RasterImage::filled(9, 4, [10, 20, 30, 255])))
        }
    }

    struct MockWriter {
        written_data: Arc<Mutex<Vec<RasterImage>>>,
    }

    impl PngWriter for MockWriter {
        fn write_png(&self, image: &RasterImage, output: &mut dyn Write) -> Result<()> {
            self.written_data.lock().unwrap().push(image.clone());
            output.write_all(b"mock png")?;
            Ok(())
        }
    }

    fn mock_pipeline(
        reader_fails: bool,
        config: ConversionConfig,
    ) -> (OptifineToFsbPipeline<MockReader, MockWriter>, Arc<Mutex<Vec<RasterImage>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: reader_fails, mock_data: None };
        let writer = MockWriter { written_data: written.clone() };
        (OptifineToFsbPipeline::with_custom(reader, writer, config), written)
    }

    /// Creates `<pack>/assets/minecraft/optifine/sky/world0` and returns it.
    fn optifine_world(pack: &Path) -> PathBuf {
        let world = pack.join("assets/minecraft/optifine/sky/world0");
        fs::create_dir_all(&world).unwrap();
        world
    }

    fn read_descriptor(path: &Path) -> SkyDescriptor {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    const FACE_FILES: [&str; 6] = [
        "sky1_top.png",
        "sky1_bottom.png",
        "sky1_north.png",
        "sky1_south.png",
        "sky1_east.png",
        "sky1_west.png",
    ];

    #[test]
    fn test_config_builder() {
        let config = ConversionConfig::builder()
            .transparent(false)
            .reconvert(true)
            .namespace("customsky")
            .build();

        assert!(!config.transparent);
        assert!(config.reconvert);
        assert_eq!(config.namespace, "customsky");

        let config = ConversionConfig::builder().build();
        assert!(config.transparent);
        assert!(!config.reconvert);
        assert_eq!(config.namespace, "fabricskyboxes");
    }

    #[test]
    fn test_successful_conversion() {
        let pack = tempfile::tempdir().unwrap();
        let world = optifine_world(pack.path());
        fs::write(world.join("sky1.properties"), "source=./sky1.png\nblend=add\nstartFadeIn=6:0:0\n").unwrap();
        fs::write(world.join("sky1.png"), b"packed").unwrap();

        let (pipeline, written) = mock_pipeline(false, ConversionConfig::default());
        let converted = pipeline
            .convert_properties_file(pack.path(), &world.join("sky1.properties"))
            .unwrap();

        assert!(matches!(converted.faces, FaceSetOutcome::Sliced));
        assert_eq!(written.lock().unwrap().len(), 6);

        let sky_dir = pack.path().join("assets/fabricskyboxes/sky");
        for name in FACE_FILES {
            assert!(sky_dir.join(name).is_file(), "{name}");
        }
        assert_eq!(converted.descriptor_path, sky_dir.join("sky1.json"));

        let descriptor = read_descriptor(&converted.descriptor_path);
        assert_eq!(descriptor.textures.top, "fabricskyboxes:sky/sky1_top.png");
        assert_eq!(descriptor.properties.blend.kind, "add");
        assert_eq!(descriptor.properties.fade.start_fade_in, Some(0));
    }

    #[test]
    fn test_missing_source_writes_placeholders() {
        let pack = tempfile::tempdir().unwrap();
        let world = optifine_world(pack.path());
        fs::write(world.join("sky1.properties"), "source=./sky1.png\n").unwrap();

        let (pipeline, written) = mock_pipeline(false, ConversionConfig::default());
        let converted = pipeline
            .convert_properties_file(pack.path(), &world.join("sky1.properties"))
            .unwrap();

        assert!(matches!(converted.faces, FaceSetOutcome::Placeholder));
        let written = written.lock().unwrap();
        assert_eq!(written.len(), 6);
        assert!(written.iter().all(|image| *image == RasterImage::filled(1, 1, PLACEHOLDER_PIXEL)));

        let sky_dir = pack.path().join("assets/fabricskyboxes/sky");
        for name in FACE_FILES {
            assert!(sky_dir.join(name).is_file(), "{name}");
        }
        assert_eq!(read_descriptor(&converted.descriptor_path).textures.west, "fabricskyboxes:sky/sky1_west.png");
    }

    #[test]
    fn test_reader_failure_still_writes_descriptor() {
        let pack = tempfile::tempdir().unwrap();
        let world = optifine_world(pack.path());
        fs::write(world.join("sky1.properties"), "source=./sky1.png\n").unwrap();
        fs::write(world.join("sky1.png"), b"corrupt").unwrap();

        let (pipeline, written) = mock_pipeline(true, ConversionConfig::default());
        let converted = pipeline
            .convert_properties_file(pack.path(), &world.join("sky1.properties"))
            .unwrap();

        assert!(matches!(converted.faces, FaceSetOutcome::Failed(ConversionError::DecodeError(_))));
        assert!(written.lock().unwrap().is_empty());
        assert!(converted.descriptor_path.is_file());
    }

    #[test]
    fn test_bad_file_does_not_stop_batch() {
        let pack = tempfile::tempdir().unwrap();
        let world = optifine_world(pack.path());
        fs::write(world.join("sky1.properties"), "source=./sky1.png\nspeed=notanumber\n").unwrap();
        fs::write(world.join("sky2.properties"), "source=./sky2.png\nspeed=2\n").unwrap();

        let (pipeline, _) = mock_pipeline(false, ConversionConfig::default());
        let report = pipeline.convert_pack(pack.path()).unwrap().unwrap();

        assert_eq!(report.converted.len(), 1);
        assert_eq!(report.converted[0].name, "sky2");
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, world.join("sky1.properties"));
        assert!(matches!(report.failed[0].1, ConversionError::ParseError { .. }));

        let sky_dir = pack.path().join("assets/fabricskyboxes/sky");
        assert!(!sky_dir.join("sky1.json").exists());
        assert!(!sky_dir.join("sky1_top.png").exists());
        assert_eq!(read_descriptor(&sky_dir.join("sky2.json")).properties.rotation.rotation_speed, Some(2.0));
    }

    #[test]
    fn test_escaping_source_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let pack = root.path().join("pack");
        let world = optifine_world(&pack);
        fs::write(world.join("sky1.properties"), "source=../../../../escaped/evil.png\n").unwrap();

        let (pipeline, written) = mock_pipeline(false, ConversionConfig::default());
        let report = pipeline.convert_pack(&pack).unwrap().unwrap();

        assert!(report.converted.is_empty());
        assert!(matches!(report.failed[0].1, ConversionError::MalformedInput(_)));
        assert!(written.lock().unwrap().is_empty());
        assert!(!root.path().join("escaped").exists());
    }

    #[test]
    fn test_rooted_source_goes_to_matching_folder() {
        let pack = tempfile::tempdir().unwrap();
        let world = optifine_world(pack.path());
        fs::write(world.join("sky1.properties"), "source=textures/sky/night.png\n").unwrap();
        fs::create_dir_all(pack.path().join("textures/sky")).unwrap();
        fs::write(pack.path().join("textures/sky/night.png"), b"packed").unwrap();

        let (pipeline, _) = mock_pipeline(false, ConversionConfig::default());
        let converted = pipeline
            .convert_properties_file(pack.path(), &world.join("sky1.properties"))
            .unwrap();

        assert!(matches!(converted.faces, FaceSetOutcome::Sliced));
        let faces_dir = pack.path().join("assets/fabricskyboxes/sky/textures/sky");
        assert!(faces_dir.join("night_north.png").is_file());
        let descriptor = read_descriptor(&converted.descriptor_path);
        assert_eq!(descriptor.textures.north, "fabricskyboxes:sky/textures/sky/night_north.png");
    }

    #[test]
    fn test_pack_detection() {
        let config = ConversionConfig::default();

        let empty = tempfile::tempdir().unwrap();
        assert_eq!(PackLayout::detect(empty.path(), &config).unwrap(), None);

        let optifine = tempfile::tempdir().unwrap();
        optifine_world(optifine.path());
        let layout = PackLayout::detect(optifine.path(), &config).unwrap().unwrap();
        assert_eq!(layout.format, SkyFormat::Optifine);

        let mcpatcher = tempfile::tempdir().unwrap();
        fs::create_dir_all(mcpatcher.path().join("assets/minecraft/mcpatcher/sky/world0")).unwrap();
        let layout = PackLayout::detect(mcpatcher.path(), &config).unwrap().unwrap();
        assert_eq!(layout.format, SkyFormat::Mcpatcher);
    }

    #[test]
    fn test_converted_pack_is_skipped_unless_reconverting() {
        let pack = tempfile::tempdir().unwrap();
        optifine_world(pack.path());
        let stale = pack.path().join("assets/fabricskyboxes/sky/old.json");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "{}").unwrap();

        let skip = ConversionConfig::default();
        assert_eq!(PackLayout::detect(pack.path(), &skip).unwrap(), None);
        assert!(stale.exists());

        let reconvert = ConversionConfig::builder().reconvert(true).build();
        assert!(PackLayout::detect(pack.path(), &reconvert).unwrap().is_some());
        assert!(!stale.exists());
    }

    #[test]
    fn test_properties_files_are_filtered_and_sorted() {
        let pack = tempfile::tempdir().unwrap();
        let world = optifine_world(pack.path());
        for name in ["sky2.properties", "sky1.properties", "sky1.png", "notes.txt"] {
            fs::write(world.join(name), "").unwrap();
        }

        let layout = PackLayout::detect(pack.path(), &ConversionConfig::default()).unwrap().unwrap();
        let files = layout.properties_files().unwrap();
        assert_eq!(files, vec![world.join("sky1.properties"), world.join("sky2.properties")]);
    }

    #[test]
    fn test_end_to_end_with_png_codec() {
        let pack = tempfile::tempdir().unwrap();
        let world = optifine_world(pack.path());
        fs::write(world.join("sky1.properties"), "source=./sky1.png\n").unwrap();

        let mut packed = RasterImage::filled(6, 4, [0, 0, 0, 255]);
        packed.set_pixel(2, 0, [255, 0, 0, 255]);
        let mut encoded = Vec::new();
        StandardPngWriter.write_png(&packed, &mut encoded).unwrap();
        fs::write(world.join("sky1.png"), encoded).unwrap();

        let pipeline = OptifineToFsbPipeline::new(ConversionConfig::default());
        let report = pipeline.convert_pack(pack.path()).unwrap().unwrap();
        assert_eq!(report.converted.len(), 1);
        assert!(report.failed.is_empty());

        let sky_dir = pack.path().join("assets/fabricskyboxes/sky");
        let top = ImagePngReader.read_png(&fs::read(sky_dir.join("sky1_top.png")).unwrap()).unwrap();
        // 2x2 tile rotated clockwise: its top-left red corner ends up top-right
        assert_eq!((top.width, top.height), (2, 2));
        assert_eq!(top.pixel(1, 0), [255, 0, 0, 255]);
        assert_eq!(top.pixel(0, 0), [255, 255, 255, 0]);
    }
}
