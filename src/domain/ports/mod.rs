//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compile_lock;
pub mod file_system;
pub mod metadata_repository;
pub mod minifier;
pub mod publisher;

pub use compile_lock::{CompileLock, LockError, LockGuard};
pub use file_system::{FileSystem, FsError, FsResult};
pub use metadata_repository::{MetadataError, MetadataRepository, RecordMap};
pub use minifier::{MinifyError, Minifier};
pub use publisher::{PublishError, PublishedAsset, Publisher};
