//! Artifact Writer
//!
//! Concatenates the local source files of one package and kind into a
//! temporary file in the runtime directory. The file is deleted when the
//! returned handle drops, whatever happens to the compile afterwards.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::CssFingerprinter;
use crate::domain::value_objects::AssetKind;
use crate::error::{AssetPackError, AssetPackResult};

pub struct ArtifactWriter<'a, FS>
where
    FS: FileSystem,
{
    fs: &'a FS,
    runtime_dir: &'a Path,
    fingerprinter: Option<&'a CssFingerprinter>,
}

impl<'a, FS> ArtifactWriter<'a, FS>
where
    FS: FileSystem,
{
    /// `fingerprinter` is applied to styles only; `None` disables it
    pub fn new(
        fs: &'a FS,
        runtime_dir: &'a Path,
        fingerprinter: Option<&'a CssFingerprinter>,
    ) -> Self {
        Self {
            fs,
            runtime_dir,
            fingerprinter,
        }
    }

    /// Combine `files` in order into a fresh temporary file
    pub fn combine(
        &self,
        package: &str,
        kind: AssetKind,
        files: &[PathBuf],
    ) -> AssetPackResult<NamedTempFile> {
        self.fs.create_dir_all(self.runtime_dir)?;
        let suffix = format!(".{}", kind.extension());
        let mut combined = tempfile::Builder::new()
            .prefix(&format!("{package}_"))
            .suffix(&suffix)
            .tempfile_in(self.runtime_dir)?;

        for file in files {
            let content = self
                .fs
                .read(file)
                .map_err(|source| AssetPackError::Combine {
                    file: file.clone(),
                    source,
                })?;

            let content = match (kind, self.fingerprinter) {
                (AssetKind::Style, Some(fingerprinter)) => {
                    fingerprinter.rewrite(file, &content, self.fs)
                }
                _ => content,
            };

            if let Err(e) = append(&mut combined, &content, kind) {
                return Err(AssetPackError::Combine {
                    file: file.clone(),
                    source: FsError::at(combined.path(), e),
                });
            }
        }

        combined.flush()?;
        Ok(combined)
    }
}

fn append(out: &mut NamedTempFile, content: &[u8], kind: AssetKind) -> std::io::Result<()> {
    out.write_all(content)?;
    out.write_all(kind.terminator().as_bytes())
}
