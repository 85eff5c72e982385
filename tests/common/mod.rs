//! Common test utilities for assetpack CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated site (web root, runtime dir, config) in a temp dir
//! - Assertion macros: `assert_output_contains!`, `assert_served!`
//! - Fixtures: Reusable source content constants
//! - `compressor`: A library-level compressor wired against a `TestEnv`

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
pub use site::*;
