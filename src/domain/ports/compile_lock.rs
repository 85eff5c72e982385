//! CompileLock port - cross-process mutual exclusion
//!
//! At most one holder of a given lock id exists across every process that
//! shares the backing store. The lock is released when the guard drops.

use std::path::PathBuf;
use std::time::Duration;

/// Held lock; dropping it releases the lock
pub trait LockGuard: Send {}

pub trait CompileLock: Send + Sync {
    /// Try to take lock `id`, waiting at most `timeout`
    ///
    /// `Ok(None)` means the timeout elapsed while someone else held it.
    fn acquire(
        &self,
        id: &str,
        timeout: Duration,
    ) -> Result<Option<Box<dyn LockGuard>>, LockError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("lock backend unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
