pub mod biome_search;
pub mod logger;

pub use biome_search::*;
pub use logger::*;
