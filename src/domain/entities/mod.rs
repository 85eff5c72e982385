//! Domain Entities
//!
//! - `Package` - A declared bundle of script/style references
//! - `CompiledRecord` - Persisted description of a package's artifacts

mod package;
mod record;

pub use package::{Package, PackageSet};
pub use record::{AssetRecord, CompiledRecord, Placement};
