use super::biome::Biome;
use super::ports::{BiomeProbe, BiomeSource};
use super::types::{GridCoordinate, WorldPosition, QUANTIZATION_SHIFT};
use crate::common::{DomainError, DomainResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

/// Probe backed by a world biome source.
///
/// A probed cell is widened to every grid cell within `radius` native blocks of its
/// corner. Among the matching cells one is picked by reservoir sampling, so each
/// match is equally likely and the world RNG decides which.
pub struct BiomeSourceProbe {
    source: Arc<dyn BiomeSource>,
    radius: i32,
    rng: Mutex<StdRng>,
}

impl BiomeSourceProbe {
    pub fn new(source: Arc<dyn BiomeSource>, radius: u32, seed: u64) -> DomainResult<Self> {
        let radius = i32::try_from(radius).map_err(|_| DomainError::InvalidSearch {
            reason: format!("probe radius {} exceeds {}", radius, i32::MAX),
        })?;
        Ok(Self {
            source,
            radius,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        })
    }

    /// Scan the cells around a native position and pick one match.
    ///
    /// Window bounds wrap at the `i32` edges; a wrapped window is empty and misses.
    pub fn find_biome_position(
        &self,
        center: WorldPosition,
        targets: &[Biome],
    ) -> Option<WorldPosition> {
        let min_x = center.x.wrapping_sub(self.radius) >> QUANTIZATION_SHIFT;
        let min_z = center.z.wrapping_sub(self.radius) >> QUANTIZATION_SHIFT;
        let max_x = center.x.wrapping_add(self.radius) >> QUANTIZATION_SHIFT;
        let max_z = center.z.wrapping_add(self.radius) >> QUANTIZATION_SHIFT;

        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut picked = None;
        let mut matches = 0u32;

        for z in min_z..=max_z {
            for x in min_x..=max_x {
                let cell = GridCoordinate::new(x, z);
                let key = self.source.biome_at(cell);
                if !targets.iter().any(|b| &b.key == key) {
                    continue;
                }
                if picked.is_none() || rng.gen_range(0..=matches) == 0 {
                    picked = Some(cell.to_world());
                }
                matches += 1;
            }
        }

        picked
    }
}

impl BiomeProbe for BiomeSourceProbe {
    fn probe(&self, cell: GridCoordinate, targets: &[Biome]) -> Option<WorldPosition> {
        self.find_biome_position(cell.to_world(), targets)
    }
}
