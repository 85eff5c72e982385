//! Publishing into a web-visible assets directory
//!
//! Every published source gets its own directory
//! `<assets_dir>/<8 hex of its canonical path>/`. A file lands inside it
//! under its own name; a directory's contents are copied into it. The
//! matching URL is `<assets_url>/<hash>/...`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::ports::{PublishError, PublishedAsset, Publisher};
use crate::domain::value_objects::ContentHash;

#[derive(Debug, Clone)]
pub struct AssetDirPublisher {
    assets_dir: PathBuf,
    assets_url: String,
}

impl AssetDirPublisher {
    pub fn new(assets_dir: impl Into<PathBuf>, assets_url: impl Into<String>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            assets_url: assets_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Name of the directory that holds the published copy of `source`
    fn slot(source: &Path) -> String {
        let canonical = fs::canonicalize(source).unwrap_or_else(|_| source.to_path_buf());
        ContentHash::from_bytes(canonical.to_string_lossy().as_bytes())
            .fingerprint()
            .to_string()
    }

    fn publish_file(&self, source: &Path, slot: &str) -> Result<PublishedAsset, PublishError> {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dest = self.assets_dir.join(slot).join(&name);

        if is_stale(source, &dest) {
            copy_file(source, &dest).map_err(|e| io_error(&dest, e))?;
            tracing::debug!(from = %source.display(), to = %dest.display(), "published file");
        }

        Ok(PublishedAsset {
            url: format!("{}/{}/{}", self.assets_url, slot, name),
            path: dest,
        })
    }

    fn publish_dir(&self, source: &Path, slot: &str) -> Result<PublishedAsset, PublishError> {
        let dest = self.assets_dir.join(slot);

        if !dest.exists() {
            copy_tree(source, &dest).map_err(|e| io_error(&dest, e))?;
            tracing::debug!(from = %source.display(), to = %dest.display(), "published directory");
        }

        Ok(PublishedAsset {
            url: format!("{}/{}", self.assets_url, slot),
            path: dest,
        })
    }
}

impl Publisher for AssetDirPublisher {
    fn publish(&self, source: &Path) -> Result<PublishedAsset, PublishError> {
        let slot = Self::slot(source);
        if source.is_file() {
            self.publish_file(source, &slot)
        } else if source.is_dir() {
            self.publish_dir(source, &slot)
        } else {
            Err(PublishError::Missing {
                path: source.to_path_buf(),
            })
        }
    }

    fn unpublish(&self, source: &Path) -> Result<bool, PublishError> {
        let dest = self.assets_dir.join(Self::slot(source));
        if !dest.exists() {
            return Ok(false);
        }
        fs::remove_dir_all(&dest).map_err(|e| io_error(&dest, e))?;
        tracing::debug!(path = %dest.display(), "unpublished");
        Ok(true)
    }
}

fn io_error(path: &Path, source: io::Error) -> PublishError {
    PublishError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Destination missing or older than the source
fn is_stale(source: &Path, dest: &Path) -> bool {
    let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified()).ok();
    match (modified(source), modified(dest)) {
        (_, None) => true,
        (Some(src), Some(dst)) => src > dst,
        (None, Some(_)) => false,
    }
}

fn copy_file(from: &Path, to: &Path) -> io::Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from, to)?;
    Ok(())
}

fn copy_tree(from: &Path, to: &Path) -> io::Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry?;
        let path = entry.path();
        let relative = path.strip_prefix(from).unwrap_or(path);
        let dest = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else if entry.file_type().is_file() {
            copy_file(path, &dest)?;
        }
    }
    Ok(())
}
