//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod metadata;

pub use metadata::{state_key, JsonMetadataRepository, STATE_FILE};
