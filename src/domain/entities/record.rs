//! Compiled record entity - what we know about a package's artifacts
//!
//! A record is the compilation cache: present means "reuse", absent means
//! "compile". It is a pure data structure; persistence goes through the
//! `MetadataRepository` port.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AssetKind;

/// How an artifact file ended up in the web root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Copied by the publisher into a directory it owns
    #[default]
    Published,
    /// Copied next to the package's own stylesheets under its `base_url`
    BaseUrlCopy,
}

/// Artifact information for one asset kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Published artifact; `None` for packages made of external URLs only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Source files that were combined, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PathBuf>,
    /// URLs to serve: external ones first, then the artifact URL
    #[serde(default)]
    pub urls: Vec<String>,
    /// CSS media attribute (styles only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default)]
    pub placement: Placement,
}

impl AssetRecord {
    /// Record for a package part that only references external URLs
    pub fn external(urls: Vec<String>) -> Self {
        Self {
            urls,
            ..Self::default()
        }
    }

    /// Record for a compiled artifact
    pub fn compiled(file: PathBuf, files: Vec<PathBuf>, urls: Vec<String>) -> Self {
        Self {
            file: Some(file),
            files,
            urls,
            ..Self::default()
        }
    }

    pub fn with_media(mut self, media: Option<String>) -> Self {
        self.media = media;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}

/// Everything persisted for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<AssetRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<AssetRecord>,
    pub compiled_at: DateTime<Utc>,
}

impl CompiledRecord {
    pub fn new() -> Self {
        Self {
            script: None,
            style: None,
            compiled_at: Utc::now(),
        }
    }

    pub fn part(&self, kind: AssetKind) -> Option<&AssetRecord> {
        match kind {
            AssetKind::Script => self.script.as_ref(),
            AssetKind::Style => self.style.as_ref(),
        }
    }

    pub fn set_part(&mut self, kind: AssetKind, part: AssetRecord) {
        match kind {
            AssetKind::Script => self.script = Some(part),
            AssetKind::Style => self.style = Some(part),
        }
    }

    /// Whether no asset kind produced anything
    pub fn is_empty(&self) -> bool {
        self.script.is_none() && self.style.is_none()
    }

    /// Artifact files referenced by this record, with their placement
    pub fn artifacts(&self) -> impl Iterator<Item = (&Path, Placement)> {
        [self.script.as_ref(), self.style.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(|part| part.file.as_deref().map(|file| (file, part.placement)))
    }

    /// All URLs of one kind (empty when the kind is absent)
    pub fn urls(&self, kind: AssetKind) -> &[String] {
        self.part(kind).map(|p| p.urls.as_slice()).unwrap_or(&[])
    }
}

impl Default for CompiledRecord {
    fn default() -> Self {
        Self::new()
    }
}
