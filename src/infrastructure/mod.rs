//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `lock/` - Cross-process compile lock (`fs2` advisory locks)
//! - `minify/` - External command and pass-through minifiers
//! - `publish/` - Assets directory publisher
//! - `repositories/` - JSON state file for compiled records

pub mod fs;
pub mod lock;
pub mod minify;
pub mod publish;
pub mod repositories;

// Re-export for convenience
pub use fs::LocalFs;
pub use lock::FileCompileLock;
pub use minify::{CommandMinifier, CopyMinifier};
pub use publish::AssetDirPublisher;
pub use repositories::JsonMetadataRepository;
