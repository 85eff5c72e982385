//! assetpack - asset package compiler
//!
//! Combines the scripts and styles of declared packages, runs them through
//! an external minifier, fingerprints CSS image references and publishes
//! the results under content-derived names. Concurrent requests in separate
//! processes coordinate through a lock file so each package is compiled at
//! most once at a time, and every request either gets the compiled URLs or
//! (when configured not to wait) the raw source URLs.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PackageCompressor, Registered, ResetTarget, WaitPolicy};
pub use config::Config;
pub use domain::entities::{AssetRecord, CompiledRecord, Package, PackageSet, Placement};
pub use domain::value_objects::AssetKind;
pub use error::{AssetPackError, AssetPackResult};
