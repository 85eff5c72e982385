//! Error types for assetpack
//!
//! Library errors use `thiserror`; each port has its own enum which converts
//! into `AssetPackError` at the application boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, LockError, MetadataError, MinifyError, PublishError};
use crate::domain::services::DependencyError;

/// Result type alias for assetpack operations
pub type AssetPackResult<T> = Result<T, AssetPackError>;

/// Main error type for assetpack operations
#[derive(Error, Debug)]
pub enum AssetPackError {
    /// Package name not declared in the configuration
    #[error("unknown package '{name}'")]
    UnknownPackage { name: String },

    /// Unknown dependency or dependency cycle
    #[error("invalid package dependencies: {0}")]
    Dependency(#[from] DependencyError),

    /// A source file could not be read or appended while combining
    #[error("failed to combine {file}: {source}")]
    Combine {
        file: PathBuf,
        #[source]
        source: FsError,
    },

    /// Invalid or unreadable configuration
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Minify(#[from] MinifyError),

    #[error(transparent)]
    Lock(#[from] LockError),

    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
