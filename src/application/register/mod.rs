//! Register Use Case
//!
//! The per-request protocol for serving a package:
//! - compression disabled → raw sources
//! - valid record → compiled URLs
//! - otherwise take the compile lock, re-check, compile, release
//! - lock busy → wait and retry, or serve raw sources for this request

mod policy;
mod result;
mod use_case;

pub use policy::{WaitPolicy, DEFAULT_RETRY_INTERVAL};
pub use result::Registered;
pub use use_case::{CompileBackend, RegisterUseCase, LOCK_ID};
