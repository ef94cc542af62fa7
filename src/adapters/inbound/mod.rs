pub mod locate_command;
pub mod text_component;

pub use locate_command::*;
pub use text_component::*;
