//! Compile options

use std::path::PathBuf;

/// Directories and switches the compile pipeline runs with
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Document root; `base_url` copies and rooted CSS URLs resolve here
    pub web_root: PathBuf,
    /// Where combined and minified files are produced
    pub runtime_dir: PathBuf,
    /// Append content fingerprints to CSS image URLs
    pub css_image_fingerprinting: bool,
}

impl CompileOptions {
    pub fn new(web_root: impl Into<PathBuf>, runtime_dir: impl Into<PathBuf>) -> Self {
        Self {
            web_root: web_root.into(),
            runtime_dir: runtime_dir.into(),
            css_image_fingerprinting: true,
        }
    }

    pub fn with_css_image_fingerprinting(mut self, enabled: bool) -> Self {
        self.css_image_fingerprinting = enabled;
        self
    }
}
