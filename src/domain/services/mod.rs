//! Domain Services
//!
//! Business logic that operates on domain entities. The fingerprinter reads
//! image bytes through the `FileSystem` port, everything else is pure.

mod css_fingerprint;
mod dependency_order;
mod registration;

pub use css_fingerprint::CssFingerprinter;
pub use dependency_order::{dependency_order, DependencyError};
pub use registration::RegistrationContext;
