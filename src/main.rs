use sky_convert_rs::config::RunConfig;
use sky_convert_rs::logger;
use sky_convert_rs::sky_pipeline::OptifineToFsbPipeline;

use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting sky_convert {}...", env!("CARGO_PKG_VERSION"));

    let run_config = RunConfig::from_args(std::env::args().skip(1))?;
    let pipeline = OptifineToFsbPipeline::new(run_config.conversion_config());

    info!("Transparency: {}", if pipeline.config().transparent { "enabled" } else { "disabled" });
    info!("Reconvert: {}", if pipeline.config().reconvert { "enabled" } else { "disabled" });
    info!("Namespace: {}", pipeline.config().namespace);

    info!("Conversion started");
    let (mut converted, mut failed) = (0usize, 0usize);
    for path in &run_config.paths {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Invalid path '{}': {}", path.display(), e);
                continue;
            }
        };
        info!("Path: {}", path.display());

        let mut packs: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        packs.sort();

        for pack in packs {
            if !pack.is_dir() {
                warn!("Skipping {}, only unpacked resource packs are supported", pack.display());
                continue;
            }
            match pipeline.convert_pack(&pack) {
                Ok(Some(report)) => {
                    converted += report.converted.len();
                    failed += report.failed.len();
                }
                Ok(None) => {}
                Err(e) => {
                    error!("Conversion of {} failed: {}", pack.display(), e);
                    failed += 1;
                }
            }
        }
    }

    info!(converted, failed, "Conversion finished");
    Ok(())
}
