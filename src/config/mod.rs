//! Configuration module for assetpack
//!
//! Precedence, highest first:
//! 1. CLI flags (`--config`)
//! 2. Environment variables (ASSETPACK_*)
//! 3. `assetpack.toml`
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    AppConfig, CompressionConfig, Config, MinifierConfig, PackageConfig, PublishConfig,
};
