//! Registration context
//!
//! The script and style references that belong to exactly one package,
//! resolved and de-duplicated. Built fresh for every compilation, so files
//! registered by other packages can never leak into an artifact.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::Package;
use crate::domain::value_objects::{is_external, AssetKind, SourceRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationContext {
    scripts: Vec<SourceRef>,
    styles: Vec<SourceRef>,
}

impl RegistrationContext {
    /// Resolve `package`'s entries; local ones against its source root
    pub fn for_package(package: &Package, web_root: &Path) -> Self {
        let root = package.source_root(web_root);
        Self {
            scripts: resolve(package.entries(AssetKind::Script), &root),
            styles: resolve(package.entries(AssetKind::Style), &root),
        }
    }

    pub fn refs(&self, kind: AssetKind) -> &[SourceRef] {
        match kind {
            AssetKind::Script => &self.scripts,
            AssetKind::Style => &self.styles,
        }
    }

    /// Split one kind into local files and external URLs, keeping order
    pub fn partition(&self, kind: AssetKind) -> (Vec<PathBuf>, Vec<String>) {
        let mut files = Vec::new();
        let mut urls = Vec::new();
        for source in self.refs(kind) {
            match source {
                SourceRef::Local { path, .. } => files.push(path.clone()),
                SourceRef::External(url) => urls.push(url.clone()),
            }
        }
        (files, urls)
    }

    /// URLs serving the uncompiled sources, local ones under `public_base`
    pub fn raw_urls(&self, kind: AssetKind, public_base: &str) -> Vec<String> {
        let base = public_base.trim_end_matches('/');
        self.refs(kind)
            .iter()
            .map(|source| match source {
                SourceRef::Local { entry, .. } => {
                    format!("{}/{}", base, entry.trim_start_matches('/'))
                }
                SourceRef::External(url) => url.clone(),
            })
            .collect()
    }
}

fn resolve(entries: &[String], root: &Path) -> Vec<SourceRef> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| seen.insert(entry.as_str()))
        .map(|entry| {
            if is_external(entry) {
                SourceRef::External(entry.clone())
            } else {
                SourceRef::Local {
                    entry: entry.clone(),
                    path: root.join(entry.trim_start_matches('/')),
                }
            }
        })
        .collect()
}
