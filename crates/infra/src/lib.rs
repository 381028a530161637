//! Infrastructure layer: configuration, resource loading and the
//! process-wide order desk state.

pub mod config;
pub mod desk;
pub mod source;

pub use config::Config;
pub use desk::OrderDesk;
pub use source::{InMemorySource, JsonDirSource, LoadError, ResourceSource};
