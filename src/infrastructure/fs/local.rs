//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ContentHash;

/// Local file system implementation
///
/// Writes go through a temp file in the destination directory followed by a
/// rename, so readers in other processes never observe a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Write `content` to `path` atomically, creating parent directories
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
    tmp.write_all(content).map_err(|e| FsError::at(path, e))?;
    tmp.as_file().sync_all().map_err(|e| FsError::at(path, e))?;
    tmp.persist(path)
        .map_err(|e| FsError::at(path, e.error))?;
    Ok(())
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        atomic_write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::at(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;
        }
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| FsError::at(from, e))
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        let bytes = std::fs::read(path).map_err(|e| FsError::at(path, e))?;
        Ok(ContentHash::from_bytes(&bytes))
    }
}
