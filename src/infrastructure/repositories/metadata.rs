//! JSON Metadata Repository
//!
//! Persists compiled records inside an application-wide JSON state file
//! (`<runtime>/state.json`). The file is an object of state keys; ours is
//! `__assetpack:<app id>`, so several applications can share one file
//! without clobbering each other's entries.

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::{Map, Value};

use crate::domain::ports::{MetadataError, MetadataRepository, RecordMap};
use crate::infrastructure::fs::atomic_write;

/// Name of the state file inside the runtime directory
pub const STATE_FILE: &str = "state.json";

pub struct JsonMetadataRepository {
    path: PathBuf,
    state_key: String,
}

impl JsonMetadataRepository {
    /// Repository for application `app_id` in `runtime_dir`
    pub fn new(runtime_dir: &Path, app_id: &str) -> Self {
        Self::with_path(runtime_dir.join(STATE_FILE), app_id)
    }

    pub fn with_path(path: PathBuf, app_id: &str) -> Self {
        Self {
            path,
            state_key: state_key(app_id),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state_key(&self) -> &str {
        &self.state_key
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn read_state(&self) -> Result<Map<String, Value>, MetadataError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| MetadataError::AccessError {
            message: e.to_string(),
        })?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|e| MetadataError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

/// Application-scoped key under which records are stored
pub fn state_key(app_id: &str) -> String {
    format!("__assetpack:{app_id}")
}

impl MetadataRepository for JsonMetadataRepository {
    fn load(&self) -> Result<RecordMap, MetadataError> {
        let mut state = self.read_state()?;
        match state.remove(&self.state_key) {
            None => Ok(RecordMap::new()),
            Some(value) => serde_json::from_value(value).map_err(|e| MetadataError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            }),
        }
    }

    fn save(&self, records: &RecordMap) -> Result<(), MetadataError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| MetadataError::AccessError {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| MetadataError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| MetadataError::AccessError {
                message: e.to_string(),
            })?;

        let result = self.save_locked(records);

        let _ = lock_file.unlock();
        result
    }
}

impl JsonMetadataRepository {
    fn save_locked(&self, records: &RecordMap) -> Result<(), MetadataError> {
        let mut state = self.read_state()?;
        if records.is_empty() {
            state.remove(&self.state_key);
        } else {
            let value =
                serde_json::to_value(records).map_err(|e| MetadataError::SerializationError {
                    message: e.to_string(),
                })?;
            state.insert(self.state_key.clone(), value);
        }

        let content = serde_json::to_string_pretty(&state).map_err(|e| {
            MetadataError::SerializationError {
                message: e.to_string(),
            }
        })?;

        atomic_write(&self.path, content.as_bytes()).map_err(|e| MetadataError::AccessError {
            message: e.to_string(),
        })
    }
}
