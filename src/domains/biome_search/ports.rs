use super::biome::Biome;
use super::resource_location::ResourceLocation;
use super::types::{GridCoordinate, WorldPosition};

/// Port the command resolves biome identifiers through.
/// Implementations (adapters) may be static tables or a live game registry.
pub trait BiomeRegistry: Send + Sync {
    fn resolve(&self, key: &ResourceLocation) -> Option<Biome>;
    /// Every registered identifier, used for argument suggestions.
    fn keys(&self) -> Vec<ResourceLocation>;
}

/// Per-cell classification oracle the ring search queries.
///
/// Given a grid cell and the target set, answers with a native-unit position
/// inside (or around) that cell whose biome is one of `targets`, or `None`.
/// Implementations may break ties between several qualifying positions randomly.
pub trait BiomeProbe: Send + Sync {
    fn probe(&self, cell: GridCoordinate, targets: &[Biome]) -> Option<WorldPosition>;
}

impl<F> BiomeProbe for F
where
    F: Fn(GridCoordinate, &[Biome]) -> Option<WorldPosition> + Send + Sync,
{
    fn probe(&self, cell: GridCoordinate, targets: &[Biome]) -> Option<WorldPosition> {
        self(cell, targets)
    }
}

/// World-side biome classification at grid resolution.
pub trait BiomeSource: Send + Sync {
    fn biome_at(&self, cell: GridCoordinate) -> &ResourceLocation;
}
