//! Compile Lock Implementations
//!
//! Concrete implementations of the CompileLock port.

mod file_lock;

pub use file_lock::{FileCompileLock, FileLockGuard};
