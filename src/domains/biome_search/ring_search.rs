use super::biome::Biome;
use super::ports::BiomeProbe;
use super::types::{GridCoordinate, WorldPosition, QUANTIZATION_SHIFT};
use crate::common::{DomainError, DomainResult};
use tracing::{debug, trace};

/// One ring-scan invocation. Built per call, never persisted.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub origin: GridCoordinate,
    /// Radius cap in native units.
    pub max_radius: u32,
    /// Stride applied to both the ring index and the offset within a ring.
    pub step_increment: u32,
    pub targets: Vec<Biome>,
}

impl SearchRequest {
    pub fn new(
        origin: GridCoordinate,
        max_radius: u32,
        step_increment: u32,
        targets: Vec<Biome>,
    ) -> DomainResult<Self> {
        if step_increment == 0 {
            return Err(DomainError::InvalidSearch {
                reason: "step increment must be at least 1".to_string(),
            });
        }
        if targets.is_empty() {
            return Err(DomainError::InvalidSearch {
                reason: "target biome set is empty".to_string(),
            });
        }
        Ok(Self {
            origin,
            max_radius,
            step_increment,
            targets,
        })
    }

    /// Build a request centred on a native position.
    pub fn around(
        position: WorldPosition,
        max_radius: u32,
        step_increment: u32,
        targets: Vec<Biome>,
    ) -> DomainResult<Self> {
        Self::new(position.to_grid(), max_radius, step_increment, targets)
    }

    /// Highest ring index the scan may reach, in grid units.
    pub fn border(&self) -> i32 {
        (self.max_radius >> QUANTIZATION_SHIFT) as i32
    }
}

/// Scan concentric square rings around the origin and return the first probe hit.
///
/// Rings `r = 0, s, 2s, ..` up to `border` are visited in order. Inside a ring both
/// offsets run from `-r` towards `r` in steps of `s`, z outer and x inner, and only
/// cells on the ring's edge (`|xi| == r || |zi| == r`) are probed. When `2r` is not a
/// multiple of `s` the `+r` edge is never reached; that gap is kept as is.
///
/// The result is the first match in scan order, which is not always the closest one.
pub fn search(request: &SearchRequest, probe: &dyn BiomeProbe) -> Option<WorldPosition> {
    let border = request.border();
    let step = request.step_increment as usize;
    let mut probed = 0usize;

    for r in (0..=border).step_by(step) {
        trace!(ring = r, "scanning ring");
        for zi in (-r..=r).step_by(step) {
            let on_z_edge = zi.abs() == r;
            for xi in (-r..=r).step_by(step) {
                if !on_z_edge && xi.abs() != r {
                    continue;
                }

                let cell = request.origin.offset(xi, zi);
                probed += 1;
                if let Some(found) = probe.probe(cell, &request.targets) {
                    debug!(ring = r, probed, x = found.x, z = found.z, "ring search hit");
                    return Some(found);
                }
            }
        }
    }

    debug!(border, probed, "ring search exhausted");
    None
}

/// Number of probe calls a fruitless scan makes for `border` and `step`.
pub fn boundary_cell_count(border: u32, step: u32) -> u64 {
    if step == 0 {
        return 0;
    }
    let rings = u64::from(border / step);
    1 + 4 * rings * (rings + 1)
}
