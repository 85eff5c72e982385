//! Package entity - a named bundle of script and style references
//!
//! Packages are declared in configuration and never mutated while a
//! compilation runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::AssetKind;

/// A declared package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    scripts: Vec<String>,
    styles: Vec<String>,
    compress: bool,
    base_url: Option<String>,
    base_path: Option<PathBuf>,
    media: Option<String>,
    depends: Vec<String>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scripts: Vec::new(),
            styles: Vec::new(),
            compress: true,
            base_url: None,
            base_path: None,
            media: None,
            depends: Vec::new(),
        }
    }

    pub fn with_scripts<I, S>(mut self, scripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scripts = scripts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    pub fn with_depends<I, S>(mut self, depends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends = depends.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared entries of one kind, in declaration order
    pub fn entries(&self, kind: AssetKind) -> &[String] {
        match kind {
            AssetKind::Script => &self.scripts,
            AssetKind::Style => &self.styles,
        }
    }

    /// Whether the package allows minification (`false` means verbatim copy)
    pub fn compress(&self) -> bool {
        self.compress
    }

    /// `base_url` without surrounding slashes, `None` when unset
    pub fn trimmed_base_url(&self) -> Option<&str> {
        self.base_url.as_deref().map(|url| url.trim_matches('/'))
    }

    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    pub fn media(&self) -> Option<&str> {
        self.media.as_deref()
    }

    pub fn depends(&self) -> &[String] {
        &self.depends
    }

    /// Directory local entries are resolved against
    ///
    /// `base_path` wins, then `web_root/base_url`, then the web root itself.
    pub fn source_root(&self, web_root: &Path) -> PathBuf {
        if let Some(base_path) = &self.base_path {
            return base_path.clone();
        }
        match self.trimmed_base_url() {
            Some(url) if !url.is_empty() => web_root.join(url),
            _ => web_root.to_path_buf(),
        }
    }
}

/// All declared packages, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSet {
    packages: BTreeMap<String, Package>,
}

impl PackageSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, package: Package) {
        self.packages.insert(package.name().to_string(), package);
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<Package> for PackageSet {
    fn from_iter<T: IntoIterator<Item = Package>>(iter: T) -> Self {
        let mut set = PackageSet::new();
        for package in iter {
            set.insert(package);
        }
        set
    }
}
