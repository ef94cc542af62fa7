use anyhow::{bail, Context, Result};
use biome_locator::adapters::inbound::{CommandSource, LocateBiomeCommand, COMMAND_NAME, REQUIRED_PERMISSION_LEVEL};
use biome_locator::adapters::outbound::{logger_from_config, InMemoryBiomeRegistry, NoiseBiomeSource};
use biome_locator::application::LocateBiomeService;
use biome_locator::domains::biome_search::{BiomeSourceProbe, WorldPosition};
use biome_locator::Config;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Usage: `locate-biome <biome> [x z]`. `LOCATE_BIOME_CONFIG` points at an optional TOML file.
fn main() -> Result<()> {
    let config_path = env::var("LOCATE_BIOME_CONFIG").ok().map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("loading configuration")?;

    let args: Vec<String> = env::args().skip(1).collect();
    let (biome, position) = match args.as_slice() {
        [biome] => (biome.clone(), WorldPosition::new(0, 0)),
        [biome, x, z] => (
            biome.clone(),
            WorldPosition::new(
                x.parse().with_context(|| format!("x coordinate '{}'", x))?,
                z.parse().with_context(|| format!("z coordinate '{}'", z))?,
            ),
        ),
        _ => bail!("usage: locate-biome <biome> [x z]"),
    };

    let logger = logger_from_config(&config.logging);

    // With a log file configured fast_log already owns the `log` facade, so only the
    // tracing dispatcher gets installed and the bridge error is expected.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .try_init();

    logger.info(&format!("Starting {} with world seed {}", COMMAND_NAME, config.world.seed));

    let registry = Arc::new(InMemoryBiomeRegistry::vanilla());
    let world = NoiseBiomeSource::new(config.world.seed, config.world.climate_scale, registry.biomes())?;
    let probe = BiomeSourceProbe::new(Arc::new(world), config.search.probe_radius, config.world.seed)?;

    let service = LocateBiomeService::new(registry, Arc::new(probe), config.search.clone(), logger);
    let command = LocateBiomeCommand::new(Arc::new(service));

    let source = CommandSource {
        position,
        permission_level: REQUIRED_PERMISSION_LEVEL,
    };
    info!(x = position.x, z = position.z, %biome, "running command");

    match command.execute(&source, &format!("/{} {}", COMMAND_NAME, biome)) {
        Ok(output) => {
            println!("{}", output.feedback.to_plain());
            println!("{}", output.feedback.to_json()?);
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e.to_component().to_plain());
            std::process::exit(1);
        }
    }
}
