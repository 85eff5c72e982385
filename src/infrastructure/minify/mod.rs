//! Minifier Implementations
//!
//! Concrete implementations of the Minifier port.

mod command;
mod copy;

pub use command::{CommandMinifier, DEFAULT_COMMAND};
pub use copy::CopyMinifier;
