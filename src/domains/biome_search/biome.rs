use super::resource_location::ResourceLocation;
use serde::{Deserialize, Serialize};

/// Climate point a biome occupies; used by noise-driven biome sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Climate {
    /// 0.0 = frozen, 1.0 = hot
    pub temperature: f32,
    /// 0.0 = arid, 1.0 = wet
    pub humidity: f32,
}

impl Climate {
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self { temperature, humidity }
    }

    pub fn distance_squared(&self, temperature: f32, humidity: f32) -> f32 {
        let dt = self.temperature - temperature;
        let dh = self.humidity - humidity;
        dt * dt + dh * dh
    }
}

/// Classification token resolved from the registry. Identity is the registry key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Biome {
    pub key: ResourceLocation,
    pub display_name: String,
    pub climate: Climate,
}

impl Biome {
    pub fn new(key: ResourceLocation, display_name: impl Into<String>, climate: Climate) -> Self {
        Self {
            key,
            display_name: display_name.into(),
            climate,
        }
    }

    /// Localization key, e.g. `biome.minecraft.desert`.
    pub fn translation_key(&self) -> String {
        format!(
            "biome.{}.{}",
            self.key.namespace(),
            self.key.path().replace('/', ".")
        )
    }
}

impl PartialEq for Biome {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Biome {}

impl std::hash::Hash for Biome {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
