// Locate Biome Service - resolves, scans and measures
use crate::common::{ApplicationError, ApplicationResult};
use crate::config::SearchConfig;
use crate::domains::biome_search::{
    search, Biome, BiomeProbe, BiomeRegistry, ResourceLocation, SearchRequest, WorldPosition,
};
use crate::domains::DynLogger;
use std::sync::Arc;
use tracing::instrument;

/// A successful locate: where the biome is and how far away from the requester.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedBiome {
    pub biome: Biome,
    pub position: WorldPosition,
    pub distance: u32,
}

pub struct LocateBiomeService {
    registry: Arc<dyn BiomeRegistry>,
    probe: Arc<dyn BiomeProbe>,
    search: SearchConfig,
    logger: DynLogger,
}

impl LocateBiomeService {
    pub fn new(
        registry: Arc<dyn BiomeRegistry>,
        probe: Arc<dyn BiomeProbe>,
        search: SearchConfig,
        logger: DynLogger,
    ) -> Self {
        Self {
            registry,
            probe,
            search,
            logger,
        }
    }

    /// Resolve `key`, ring-scan around `requester` and report the first hit.
    #[instrument(skip(self))]
    pub fn locate(
        &self,
        requester: WorldPosition,
        key: &ResourceLocation,
    ) -> ApplicationResult<LocatedBiome> {
        let biome = self.resolve(key)?;

        let request = SearchRequest::around(
            requester,
            self.search.max_radius,
            self.search.step_increment,
            vec![biome.clone()],
        )?;

        match search(&request, self.probe.as_ref()) {
            Some(position) => {
                let distance = requester.planar_distance(position);
                self.logger.info(&format!(
                    "Located {} at ({}, {}), {} blocks from ({}, {})",
                    biome.key, position.x, position.z, distance, requester.x, requester.z
                ));
                Ok(LocatedBiome {
                    biome,
                    position,
                    distance,
                })
            }
            None => {
                self.logger.warn(&format!(
                    "No {} within {} blocks of ({}, {})",
                    biome.key, self.search.max_radius, requester.x, requester.z
                ));
                Err(ApplicationError::BiomeNotFound {
                    biome: biome.display_name,
                })
            }
        }
    }

    /// Registry lookup; unknown keys fail before any scanning happens.
    pub fn resolve(&self, key: &ResourceLocation) -> ApplicationResult<Biome> {
        self.registry.resolve(key).ok_or_else(|| {
            self.logger.warn(&format!("Unknown biome {}", key));
            ApplicationError::UnknownBiome {
                identifier: key.to_string(),
            }
        })
    }

    /// Registry identifiers matching a partially typed argument, sorted.
    ///
    /// Bare paths match too, so `des` suggests `minecraft:desert`.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .registry
            .keys()
            .into_iter()
            .map(|k| k.to_string())
            .filter(|full| {
                full.starts_with(partial)
                    || full
                        .split_once(':')
                        .map_or(false, |(_, path)| path.starts_with(partial))
            })
            .collect();
        out.sort();
        out
    }
}
