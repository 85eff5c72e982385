//! Compile Use Case
//!
//! Builds the artifacts of one package:
//! - dependencies without a valid record are compiled first
//! - local files are combined, minified and published per kind
//! - external URLs are carried through unchanged
//! - the resulting record is persisted through the metadata store

mod options;
mod use_case;

pub use options::CompileOptions;
pub use use_case::{CompileUseCase, RawUrls};
