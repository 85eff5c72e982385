//! Minifier port - black-box JS/CSS shrinking
//!
//! Implementations:
//! - `CommandMinifier` - shells out to an external tool
//! - `CopyMinifier` - verbatim copy for packages with `compress = false`

use std::path::{Path, PathBuf};

use crate::domain::value_objects::AssetKind;

pub trait Minifier: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Read `input`, write the minified result to `output`
    fn minify(&self, input: &Path, output: &Path, kind: AssetKind) -> Result<(), MinifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MinifyError {
    #[error("could not start minifier `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "could not create compressed {kind} file (exit code {code:?})\nCommand was:\n{command}\n{stderr}"
    )]
    Failed {
        kind: AssetKind,
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
