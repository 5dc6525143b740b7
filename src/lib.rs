pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod transforms;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, TomlConfig};
pub use core::{engine::CleanerEngine, pipeline::ContactPipeline};
pub use utils::error::{CleanerError, Result};
