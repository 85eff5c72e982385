//! CSS image fingerprinting
//!
//! Appends `?<fingerprint>` to local image URLs inside stylesheets so that a
//! changed image gets a new URL. Example input:
//!
//! ```text
//! background: url('/images/stars/star.png') no-repeat 0px 0px;
//! ```
//!
//! - single, double or no quotes are accepted
//! - absolute URLs (`http://`, `https://`, `//`) are left alone
//! - only jpg, jpeg, gif and png references are touched
//! - URLs that already carry a query string never match
//! - text is handled as bytes, so stylesheets in any ASCII-compatible
//!   encoding pass through unchanged

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::bytes::{Captures, Regex};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::is_absolute_url;

static IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)url\(\s*['"]?([^'"()]*?\.(?:jpg|jpeg|gif|png))['"]?\s*\)"#)
        .expect("image url pattern is valid")
});

/// Rewrites image URLs in CSS text
#[derive(Debug, Clone)]
pub struct CssFingerprinter {
    web_root: PathBuf,
}

impl CssFingerprinter {
    /// `web_root` resolves URLs starting with `/`
    pub fn new(web_root: impl Into<PathBuf>) -> Self {
        Self {
            web_root: web_root.into(),
        }
    }

    /// Return `css` with every resolvable image URL fingerprinted
    ///
    /// `css_path` is the stylesheet the text came from; relative URLs are
    /// resolved against its directory.
    pub fn rewrite<FS>(&self, css_path: &Path, css: &[u8], fs: &FS) -> Vec<u8>
    where
        FS: FileSystem + ?Sized,
    {
        IMAGE_URL
            .replace_all(css, |caps: &Captures<'_>| {
                let original = caps[0].to_vec();
                let Ok(url) = std::str::from_utf8(&caps[1]) else {
                    return original;
                };

                if is_absolute_url(url) {
                    return original;
                }

                let image = self.resolve(css_path, url);
                if !fs.is_file(&image) {
                    // Not fatal: the image may be served by a rewrite rule.
                    tracing::debug!(
                        image = %image.display(),
                        css = %css_path.display(),
                        "css image not found on disk, leaving url untouched"
                    );
                    return original;
                }

                match fs.hash(&image) {
                    Ok(hash) => format!("url('{}?{}')", url, hash.fingerprint()).into_bytes(),
                    Err(err) => {
                        tracing::debug!(image = %image.display(), %err, "cannot hash css image");
                        original
                    }
                }
            })
            .into_owned()
    }

    fn resolve(&self, css_path: &Path, url: &str) -> PathBuf {
        match url.strip_prefix('/') {
            Some(rooted) => self.web_root.join(rooted),
            None => css_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(url),
        }
    }
}
