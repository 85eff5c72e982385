//! Advisory file lock shared by every process on the host
//!
//! Each lock id maps to `<dir>/<id>.lock`. The OS releases the lock when
//! the holder exits, so a crashed compile never wedges the others.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use fs2::FileExt;

use crate::domain::ports::{CompileLock, LockError, LockGuard};

/// Delay between two attempts while the lock is contended
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct FileCompileLock {
    dir: PathBuf,
}

impl FileCompileLock {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn lock_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.lock"))
    }

    fn open(&self, path: &Path) -> Result<File, LockError> {
        let unavailable = |source| LockError::Unavailable {
            path: path.to_path_buf(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(unavailable)?;
        OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(path)
            .map_err(unavailable)
    }
}

impl CompileLock for FileCompileLock {
    fn acquire(
        &self,
        id: &str,
        timeout: Duration,
    ) -> Result<Option<Box<dyn LockGuard>>, LockError> {
        let path = self.lock_path(id);
        let file = self.open(&path)?;
        let deadline = Instant::now() + timeout;

        loop {
            match file.try_lock_exclusive() {
                Ok(()) => {
                    tracing::debug!(lock = %path.display(), "lock acquired");
                    return Ok(Some(Box::new(FileLockGuard { file, path })));
                }
                Err(err) if is_contended(&err) => {}
                Err(source) => return Err(LockError::Unavailable { path, source }),
            }

            let now = Instant::now();
            if now >= deadline {
                tracing::debug!(lock = %path.display(), "lock wait timed out");
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }
}

fn is_contended(err: &std::io::Error) -> bool {
    if err.kind() == ErrorKind::WouldBlock {
        return true;
    }
    err.raw_os_error().is_some() && err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

/// Releases the lock on drop
#[derive(Debug)]
pub struct FileLockGuard {
    file: File,
    path: PathBuf,
}

impl LockGuard for FileLockGuard {}

impl Drop for FileLockGuard {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            tracing::warn!(lock = %self.path.display(), "failed to release lock: {e}");
        } else {
            tracing::debug!(lock = %self.path.display(), "lock released");
        }
    }
}
