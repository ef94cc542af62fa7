#![allow(dead_code)]

use biome_locator::adapters::outbound::{init_noop_logger, InMemoryBiomeRegistry};
use biome_locator::application::LocateBiomeService;
use biome_locator::config::SearchConfig;
use biome_locator::domains::biome_search::{
    Biome, BiomeProbe, BiomeSource, Climate, GridCoordinate, ResourceLocation, WorldPosition,
};
use biome_locator::domains::logger::DomainLogger;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub fn biome(path: &str, name: &str) -> Biome {
    Biome::new(ResourceLocation::minecraft(path).unwrap(), name, Climate::new(0.5, 0.5))
}

pub fn desert() -> Biome {
    biome("desert", "Desert")
}

pub fn registry_with(biomes: &[Biome]) -> Arc<InMemoryBiomeRegistry> {
    Arc::new(InMemoryBiomeRegistry::new(biomes.iter().cloned()))
}

/// Probe stub that records every probed cell and hits only at configured cells.
#[derive(Default)]
pub struct RecordingProbe {
    calls: Mutex<Vec<GridCoordinate>>,
    hits: HashMap<GridCoordinate, WorldPosition>,
}

impl RecordingProbe {
    pub fn missing() -> Self {
        Self::default()
    }

    /// Hit at `cell`, answering with the cell's native corner.
    pub fn hit_at(cells: &[GridCoordinate]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            hits: cells.iter().map(|c| (*c, c.to_world())).collect(),
        }
    }

    pub fn answering(cell: GridCoordinate, answer: WorldPosition) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            hits: HashMap::from([(cell, answer)]),
        }
    }

    pub fn calls(&self) -> Vec<GridCoordinate> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl BiomeProbe for RecordingProbe {
    fn probe(&self, cell: GridCoordinate, _targets: &[Biome]) -> Option<WorldPosition> {
        self.calls.lock().unwrap().push(cell);
        self.hits.get(&cell).copied()
    }
}

/// Hand-painted world: listed cells carry their biome, everything else is plains.
pub struct PaintedBiomeSource {
    cells: HashMap<GridCoordinate, ResourceLocation>,
    background: ResourceLocation,
}

impl PaintedBiomeSource {
    pub fn new(cells: &[(GridCoordinate, &str)]) -> Self {
        Self {
            cells: cells
                .iter()
                .map(|(c, path)| (*c, ResourceLocation::minecraft(path).unwrap()))
                .collect(),
            background: ResourceLocation::minecraft("plains").unwrap(),
        }
    }
}

impl BiomeSource for PaintedBiomeSource {
    fn biome_at(&self, cell: GridCoordinate) -> &ResourceLocation {
        self.cells.get(&cell).unwrap_or(&self.background)
    }
}

pub struct CaptureLogger {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self { messages: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.lock().unwrap().iter().any(|m| m.contains(needle))
    }
}

impl DomainLogger for CaptureLogger {
    fn info(&self, msg: &str) { self.messages.lock().unwrap().push(format!("INFO:{}", msg)); }
    fn warn(&self, msg: &str) { self.messages.lock().unwrap().push(format!("WARN:{}", msg)); }
    fn error(&self, msg: &str) { self.messages.lock().unwrap().push(format!("ERR:{}", msg)); }
}

pub fn service(
    biomes: &[Biome],
    probe: Arc<dyn BiomeProbe>,
    search: SearchConfig,
) -> LocateBiomeService {
    LocateBiomeService::new(registry_with(biomes), probe, search, init_noop_logger())
}

pub fn search_config(max_radius: u32, step_increment: u32) -> SearchConfig {
    SearchConfig {
        max_radius,
        step_increment,
        ..SearchConfig::default()
    }
}
