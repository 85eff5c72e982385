//! Publisher Implementations
//!
//! Concrete implementations of the Publisher port.

mod asset_dir;

pub use asset_dir::AssetDirPublisher;
