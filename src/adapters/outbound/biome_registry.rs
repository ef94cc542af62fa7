use crate::domains::biome_search::{Biome, BiomeRegistry, Climate, ResourceLocation};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

// (path, display name, temperature, humidity)
const VANILLA_OVERWORLD: &[(&str, &str, f32, f32)] = &[
    ("ocean", "Ocean", 0.40, 0.55),
    ("deep_ocean", "Deep Ocean", 0.40, 0.65),
    ("frozen_ocean", "Frozen Ocean", 0.15, 0.60),
    ("river", "River", 0.40, 0.45),
    ("beach", "Beach", 0.52, 0.55),
    ("plains", "Plains", 0.52, 0.40),
    ("sunflower_plains", "Sunflower Plains", 0.55, 0.35),
    ("desert", "Desert", 1.00, 0.00),
    ("badlands", "Badlands", 0.92, 0.10),
    ("savanna", "Savanna", 0.68, 0.05),
    ("mountains", "Mountains", 0.28, 0.30),
    ("forest", "Forest", 0.48, 0.80),
    ("birch_forest", "Birch Forest", 0.44, 0.60),
    ("dark_forest", "Dark Forest", 0.48, 0.90),
    ("taiga", "Taiga", 0.30, 0.80),
    ("snowy_taiga", "Snowy Taiga", 0.10, 0.40),
    ("snowy_tundra", "Snowy Tundra", 0.20, 0.50),
    ("swamp", "Swamp", 0.52, 0.92),
    ("jungle", "Jungle", 0.60, 1.00),
    ("mushroom_fields", "Mushroom Fields", 0.56, 0.70),
];

static VANILLA_BIOMES: Lazy<Vec<Biome>> = Lazy::new(|| {
    VANILLA_OVERWORLD
        .iter()
        .filter_map(|(path, name, temperature, humidity)| {
            let key = ResourceLocation::minecraft(path).ok()?;
            Some(Biome::new(key, *name, Climate::new(*temperature, *humidity)))
        })
        .collect()
});

/// Registry held in memory, keyed and iterated in identifier order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBiomeRegistry {
    biomes: BTreeMap<ResourceLocation, Biome>,
}

impl InMemoryBiomeRegistry {
    pub fn new(biomes: impl IntoIterator<Item = Biome>) -> Self {
        let mut registry = Self::default();
        for biome in biomes {
            registry.insert(biome);
        }
        registry
    }

    /// The overworld biomes of the base game.
    pub fn vanilla() -> Self {
        Self::new(VANILLA_BIOMES.iter().cloned())
    }

    /// Register a biome, replacing any previous entry under the same key.
    pub fn insert(&mut self, biome: Biome) {
        self.biomes.insert(biome.key.clone(), biome);
    }

    pub fn biomes(&self) -> impl Iterator<Item = &Biome> {
        self.biomes.values()
    }
}

impl BiomeRegistry for InMemoryBiomeRegistry {
    fn resolve(&self, key: &ResourceLocation) -> Option<Biome> {
        self.biomes.get(key).cloned()
    }

    fn keys(&self) -> Vec<ResourceLocation> {
        self.biomes.keys().cloned().collect()
    }
}
