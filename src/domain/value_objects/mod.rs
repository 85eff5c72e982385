//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_kind;
mod hash;
mod source_ref;

pub use asset_kind::AssetKind;
pub use hash::ContentHash;
pub use source_ref::{is_absolute_url, is_external, SourceRef};
