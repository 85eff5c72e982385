//! Shared fixtures for application tests

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tempfile::{tempdir, TempDir};

use crate::application::compile::{CompileOptions, CompileUseCase};
use crate::application::metadata::MetadataStore;
use crate::domain::entities::PackageSet;
use crate::domain::ports::{MinifyError, Minifier};
use crate::domain::value_objects::AssetKind;
use crate::infrastructure::{AssetDirPublisher, JsonMetadataRepository, LocalFs};

/// Copies input to output, counting invocations
#[derive(Debug, Clone, Default)]
pub struct CountingMinifier {
    pub calls: Arc<AtomicUsize>,
    pub delay: Duration,
    pub fail: bool,
}

impl CountingMinifier {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Minifier for CountingMinifier {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn minify(&self, input: &Path, output: &Path, kind: AssetKind) -> Result<(), MinifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        if self.fail {
            return Err(MinifyError::Failed {
                kind,
                command: "counting".to_string(),
                code: Some(1),
                stderr: "refused".to_string(),
            });
        }
        fs::copy(input, output)
            .map(|_| ())
            .map_err(|source| MinifyError::Copy {
                from: input.to_path_buf(),
                to: output.to_path_buf(),
                source,
            })
    }
}

pub type TestCompile = CompileUseCase<LocalFs, AssetDirPublisher, CountingMinifier>;
pub type TestStore = MetadataStore<JsonMetadataRepository, LocalFs>;

/// Web root, runtime dir and assets dir inside one temp dir
pub struct Site {
    pub dir: TempDir,
}

impl Site {
    pub fn new() -> Self {
        let site = Self {
            dir: tempdir().expect("tempdir"),
        };
        fs::create_dir_all(site.web_root()).expect("web root");
        site
    }

    pub fn web_root(&self) -> PathBuf {
        self.dir.path().join("www")
    }

    pub fn runtime_dir(&self) -> PathBuf {
        self.dir.path().join("runtime")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.web_root().join("assets")
    }

    /// Write a file relative to the web root
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.web_root().join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(&path, content).expect("write");
        path
    }

    pub fn store(&self) -> TestStore {
        MetadataStore::new(
            JsonMetadataRepository::new(&self.runtime_dir(), "test"),
            LocalFs::new(),
        )
    }

    pub fn compiler(&self, packages: PackageSet, minifier: CountingMinifier) -> TestCompile {
        CompileUseCase::new(
            LocalFs::new(),
            AssetDirPublisher::new(self.assets_dir(), "/assets"),
            minifier,
            packages,
            CompileOptions::new(self.web_root(), self.runtime_dir()),
        )
    }

    /// Files left in the runtime dir, ignoring state and lock files
    pub fn runtime_leftovers(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.runtime_dir()) else {
            return Vec::new();
        };
        entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| {
                let name = p.file_name().unwrap_or_default().to_string_lossy();
                !name.ends_with(".json") && !name.ends_with(".lock")
            })
            .collect()
    }
}

/// Path on disk for a URL under the web root
pub fn served_path(site: &Site, url: &str) -> PathBuf {
    site.web_root().join(url.trim_start_matches('/'))
}
