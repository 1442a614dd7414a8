pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use config::CliConfig;
pub use core::{engine::ScanEngine, pipeline::DiagramPipeline};
pub use utils::error::{DiagramError, Result};
