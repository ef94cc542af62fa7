pub mod biome;
pub mod ports;
pub mod probe;
pub mod resource_location;
pub mod ring_search;
pub mod types;

pub use biome::*;
pub use ports::*;
pub use probe::*;
pub use resource_location::*;
pub use ring_search::*;
pub use types::*;
