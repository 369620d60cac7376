pub mod capability;
pub mod loader;

pub use capability::Capability;
pub use loader::*;
