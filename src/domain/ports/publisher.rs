//! Publisher port - exposes files under a public URL
//!
//! Compiled artifacts live in a private runtime directory; the publisher
//! copies them to a web-accessible location.

use std::path::{Path, PathBuf};

/// Where a published file or directory ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedAsset {
    /// Public URL
    pub url: String,
    /// Location of the published copy
    pub path: PathBuf,
}

pub trait Publisher: Send + Sync {
    /// Publish a file or a whole directory
    fn publish(&self, source: &Path) -> Result<PublishedAsset, PublishError>;

    /// Remove the published copy of `source`; `false` if none existed
    fn unpublish(&self, source: &Path) -> Result<bool, PublishError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("asset to be published does not exist: {path}")]
    Missing { path: PathBuf },

    #[error("failed to publish {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
