//! Pass-through minifier for packages that opt out of compression

use std::path::Path;

use crate::domain::ports::{MinifyError, Minifier};
use crate::domain::value_objects::AssetKind;

#[derive(Debug, Clone, Copy, Default)]
pub struct CopyMinifier;

impl Minifier for CopyMinifier {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn minify(&self, input: &Path, output: &Path, _kind: AssetKind) -> Result<(), MinifyError> {
        std::fs::copy(input, output)
            .map(|_| ())
            .map_err(|source| MinifyError::Copy {
                from: input.to_path_buf(),
                to: output.to_path_buf(),
                source,
            })
    }
}
