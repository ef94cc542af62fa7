pub mod biome_registry;
pub mod console_logger;
pub mod file_logger;
pub mod multi_logger;
pub mod noise_biome_source;
pub mod noop_logger;

pub use biome_registry::*;
pub use console_logger::*;
pub use file_logger::*;
pub use multi_logger::*;
pub use noise_biome_source::*;
pub use noop_logger::*;
