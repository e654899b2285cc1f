pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{HttpRegistry, LocalStorage, StaticRegistry};
pub use core::pipeline::ReconPipeline;
pub use utils::error::{ReconError, Result};
