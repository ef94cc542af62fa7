pub mod locate_biome_service;

pub use locate_biome_service::*;
