//! MetadataRepository port - persistence of compiled records
//!
//! The backing store holds the whole `name -> record` map. Every `save`
//! replaces it as a unit; callers serialize writers with the compile lock.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::entities::CompiledRecord;

/// All compiled records, keyed by package name
pub type RecordMap = BTreeMap<String, CompiledRecord>;

pub trait MetadataRepository: Send + Sync {
    /// Read the persisted map (empty when nothing was stored yet)
    fn load(&self) -> Result<RecordMap, MetadataError>;

    /// Replace the persisted map; must be durable when this returns
    fn save(&self, records: &RecordMap) -> Result<(), MetadataError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("failed to access compile state: {message}")]
    AccessError { message: String },

    #[error("failed to serialize compile state: {message}")]
    SerializationError { message: String },

    #[error(
        "compile state corrupted: {path}\n  → Fix: run `assetpack reset` or delete the file\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
