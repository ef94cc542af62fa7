//! Seeded climate-noise biome source.
//!
//! Temperature and humidity are sampled from two independent value-noise fields and
//! each grid cell takes the palette biome whose climate point is nearest.

use crate::common::{DomainError, DomainResult};
use crate::domains::biome_search::{Biome, BiomeSource, Climate, GridCoordinate, ResourceLocation};

/// Grid cells per noise lattice step (64 cells = 256 blocks).
pub const DEFAULT_CLIMATE_SCALE: u32 = 64;

const HUMIDITY_SALT: u64 = 0x5DEE_CE66_D1CE_4E5B;

pub struct NoiseBiomeSource {
    seed: u64,
    scale: f64,
    palette: Vec<(ResourceLocation, Climate)>,
}

impl NoiseBiomeSource {
    pub fn new<'a>(
        seed: u64,
        scale: u32,
        palette: impl IntoIterator<Item = &'a Biome>,
    ) -> DomainResult<Self> {
        let palette: Vec<_> = palette
            .into_iter()
            .map(|b| (b.key.clone(), b.climate))
            .collect();
        if palette.is_empty() {
            return Err(DomainError::InvalidSearch {
                reason: "biome source palette is empty".to_string(),
            });
        }
        Ok(Self {
            seed,
            scale: f64::from(scale.max(1)),
            palette,
        })
    }

    /// Sampled (temperature, humidity), both in [0, 1].
    pub fn climate_at(&self, cell: GridCoordinate) -> (f32, f32) {
        let x = f64::from(cell.x) / self.scale;
        let z = f64::from(cell.z) / self.scale;
        (
            value_noise(self.seed, x, z) as f32,
            value_noise(self.seed ^ HUMIDITY_SALT, x, z) as f32,
        )
    }
}

impl BiomeSource for NoiseBiomeSource {
    fn biome_at(&self, cell: GridCoordinate) -> &ResourceLocation {
        let (temperature, humidity) = self.climate_at(cell);
        let mut best = &self.palette[0];
        let mut best_distance = f32::INFINITY;
        for entry in &self.palette {
            let d = entry.1.distance_squared(temperature, humidity);
            if d < best_distance {
                best = entry;
                best_distance = d;
            }
        }
        &best.0
    }
}

fn value_noise(seed: u64, x: f64, z: f64) -> f64 {
    let x0 = x.floor();
    let z0 = z.floor();
    let tx = smoothstep(x - x0);
    let tz = smoothstep(z - z0);
    let (ix, iz) = (x0 as i64, z0 as i64);

    let v00 = lattice(seed, ix, iz);
    let v10 = lattice(seed, ix + 1, iz);
    let v01 = lattice(seed, ix, iz + 1);
    let v11 = lattice(seed, ix + 1, iz + 1);

    let top = v00 + (v10 - v00) * tx;
    let bottom = v01 + (v11 - v01) * tx;
    top + (bottom - top) * tz
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Hash a lattice point to [0, 1).
fn lattice(seed: u64, x: i64, z: i64) -> f64 {
    let mut h = seed
        ^ (x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (z as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    // splitmix64 finalizer
    h = (h ^ (h >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h = (h ^ (h >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    h ^= h >> 31;
    (h >> 11) as f64 / (1u64 << 53) as f64
}
