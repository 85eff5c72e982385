//! Source reference value object
//!
//! A package entry is either a file we combine or a URL we pass through.

use std::path::PathBuf;

/// Whether a reference points at another host (or scheme-relative URL)
///
/// `http://`, `https://` and anything else starting with `http`, plus
/// protocol-relative `//cdn/...` references, count as external.
pub fn is_external(reference: &str) -> bool {
    let lower = reference.get(..4).map(str::to_ascii_lowercase);
    lower.as_deref() == Some("http") || reference.starts_with("//")
}

/// Whether a URL is absolute and must never be rewritten locally
pub fn is_absolute_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || url.starts_with("//")
}

/// A resolved package entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceRef {
    /// A file on disk, already resolved to its absolute location
    Local {
        /// Entry as written in the package declaration
        entry: String,
        /// Resolved path
        path: PathBuf,
    },
    /// A URL served as is
    External(String),
}
