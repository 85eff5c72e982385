//! Metadata Store
//!
//! In-memory view of the persisted compiled records. The backing map is
//! loaded lazily and re-read on demand; every mutation is written through
//! immediately so other processes see it.
//!
//! Reads validate: a record whose artifact file has disappeared is dropped
//! and persisted as dropped, which makes the next request recompile.

use std::path::Path;

use crate::domain::entities::{CompiledRecord, Placement};
use crate::domain::ports::{FileSystem, MetadataRepository, RecordMap};
use crate::error::AssetPackResult;

/// Which records `invalidate` removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetTarget {
    One(String),
    All,
}

pub struct MetadataStore<MR, FS>
where
    MR: MetadataRepository,
    FS: FileSystem,
{
    repo: MR,
    fs: FS,
    cache: Option<RecordMap>,
}

impl<MR, FS> MetadataStore<MR, FS>
where
    MR: MetadataRepository,
    FS: FileSystem,
{
    pub fn new(repo: MR, fs: FS) -> Self {
        Self {
            repo,
            fs,
            cache: None,
        }
    }

    fn records(&mut self, force_reload: bool) -> AssetPackResult<&mut RecordMap> {
        if force_reload || self.cache.is_none() {
            self.cache = Some(self.repo.load()?);
        }
        Ok(self.cache.get_or_insert_with(RecordMap::new))
    }

    /// Drop the in-memory copy and re-read the persisted records
    pub fn reload(&mut self) -> AssetPackResult<()> {
        self.records(true).map(|_| ())
    }

    /// Validated record for `name`
    ///
    /// `force_reload` discards the in-memory copy first; use it after
    /// acquiring the compile lock, when another process may have written.
    pub fn get(&mut self, name: &str, force_reload: bool) -> AssetPackResult<Option<CompiledRecord>> {
        let Some(record) = self.records(force_reload)?.get(name).cloned() else {
            return Ok(None);
        };

        if let Some(missing) = self.missing_artifact(&record) {
            tracing::info!(
                package = name,
                file = %missing.display(),
                "compiled artifact missing, dropping record"
            );
            self.set(name, None)?;
            return Ok(None);
        }

        Ok(Some(record))
    }

    fn missing_artifact<'r>(&self, record: &'r CompiledRecord) -> Option<&'r Path> {
        record
            .artifacts()
            .map(|(file, _)| file)
            .find(|file| !self.fs.is_file(file))
    }

    /// Store (`Some`) or clear (`None`) the record for `name`
    pub fn set(&mut self, name: &str, record: Option<CompiledRecord>) -> AssetPackResult<()> {
        let records = self.records(false)?;
        match record {
            Some(record) => {
                records.insert(name.to_string(), record);
            }
            None => {
                records.remove(name);
            }
        }
        let snapshot = records.clone();
        self.repo.save(&snapshot)?;
        Ok(())
    }

    /// Names of all compiled packages, sorted
    pub fn names(&mut self) -> AssetPackResult<Vec<String>> {
        Ok(self.records(false)?.keys().cloned().collect())
    }

    /// Delete artifacts and records; `false` when nothing matched
    pub fn invalidate(&mut self, target: ResetTarget) -> AssetPackResult<bool> {
        let records = self.records(true)?;
        let names: Vec<String> = match &target {
            ResetTarget::One(name) if records.contains_key(name) => vec![name.clone()],
            ResetTarget::One(_) => Vec::new(),
            ResetTarget::All => records.keys().cloned().collect(),
        };
        if names.is_empty() {
            return Ok(false);
        }

        let removed: Vec<CompiledRecord> = names
            .iter()
            .filter_map(|name| records.remove(name))
            .collect();
        let snapshot = records.clone();

        for record in &removed {
            for (file, placement) in record.artifacts() {
                self.delete_artifact(file, placement);
            }
        }

        self.repo.save(&snapshot)?;
        tracing::info!(packages = ?names, "compiled packages reset");
        Ok(true)
    }

    fn delete_artifact(&self, file: &Path, placement: Placement) {
        let result = match placement {
            Placement::Published => match file.parent() {
                Some(dir) if self.fs.exists(dir) => self.fs.remove_dir_all(dir),
                _ => Ok(()),
            },
            Placement::BaseUrlCopy if self.fs.exists(file) => self.fs.remove(file),
            Placement::BaseUrlCopy => Ok(()),
        };
        if let Err(e) = result {
            tracing::warn!(file = %file.display(), "failed to delete artifact: {e}");
        }
    }
}
