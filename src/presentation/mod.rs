//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the compressor with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line interface definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text and JSON rendering of records and registrations
//!
//! ## Usage
//!
//! ```ignore
//! use assetpack::presentation::factory;
//!
//! let mut compressor = factory::create_compressor(&config);
//! let registered = compressor.register_package("app")?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::create_compressor;
