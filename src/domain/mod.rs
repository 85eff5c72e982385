//! Domain Layer
//!
//! The core of assetpack - packages, compiled records and the rules around
//! them, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Package, CompiledRecord)
//! - `value_objects/` - Immutable value types (AssetKind, ContentHash, SourceRef)
//! - `services/` - Domain services (CssFingerprinter, dependency ordering)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - Files are only touched through ports
//! 2. **Ports & Adapters** - Locks, storage, minifiers and publishing are traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
