use crate::common::{DomainError, DomainResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `LOCATE_BIOME_SEARCH__MAX_RADIUS=3200`.
pub const ENV_PREFIX: &str = "LOCATE_BIOME";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub world: WorldConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Radius cap in blocks.
    pub max_radius: u32,
    /// Stride, in grid cells, between probed rings and between cells on a ring.
    pub step_increment: u32,
    /// Blocks around each probed cell corner the biome source inspects.
    pub probe_radius: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub seed: u64,
    /// Grid cells per climate-noise lattice step.
    pub climate_scale: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Domain log file; console only when unset.
    pub file: Option<String>,
    pub filter: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_radius: 6400,
            step_increment: 8,
            probe_radius: 1,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            climate_scale: 64,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse a TOML file; missing sections take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Layer defaults, an optional TOML file and `LOCATE_BIOME_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(true),
            );
        }
        let config: Config = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.search.step_increment == 0 {
            return Err(DomainError::InvalidSearch {
                reason: "search.step_increment must be at least 1".to_string(),
            });
        }
        if i32::try_from(self.search.probe_radius).is_err() {
            return Err(DomainError::InvalidSearch {
                reason: format!("search.probe_radius must not exceed {}", i32::MAX),
            });
        }
        Ok(())
    }
}
