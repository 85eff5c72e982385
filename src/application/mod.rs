//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileUseCase` - Combine, minify and publish one package
//! - `RegisterUseCase` - Per-request single-flight protocol around compiles
//! - `PackageCompressor` - Facade used by the CLI and embedding applications
//!
//! ## Services
//!
//! - `MetadataStore` - Cached, self-healing view of compiled records
//! - `ArtifactWriter` - Concatenation of package sources

pub mod combine;
pub mod compile;
mod compressor;
pub mod metadata;
pub mod register;
#[cfg(test)]
pub(crate) mod testing;

pub use combine::ArtifactWriter;
pub use compile::{CompileOptions, CompileUseCase, RawUrls};
pub use compressor::PackageCompressor;
pub use metadata::{MetadataStore, ResetTarget};
pub use register::{CompileBackend, RegisterUseCase, Registered, WaitPolicy, LOCK_ID};
