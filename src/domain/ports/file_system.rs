//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the pipeline read sources, hash files and move artifacts around
//! without depending on a concrete implementation.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the offending path to an I/O error
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
pub trait FileSystem: Send + Sync {
    /// Read file content; sources may be in any encoding
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a regular file exists
    fn is_file(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy a file, creating the destination's parent directories
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Compute the content hash of a file
    fn hash(&self, path: &Path) -> FsResult<ContentHash>;
}
