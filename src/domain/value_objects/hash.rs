//! Content Hash Value Object
//!
//! A stable digest of a file's bytes. Artifacts are named after a 16 hex
//! character prefix of it, CSS image URLs get an 8 character fingerprint.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps the lowercase hex SHA-256 digest of some content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix length used in artifact file names
    pub const ARTIFACT_LEN: usize = 16;

    /// Prefix length used for CSS image fingerprints
    pub const FINGERPRINT_LEN: usize = 8;

    /// Compute the hash of raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(content)))
    }

    /// Wrap an already computed hex digest
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into().to_ascii_lowercase())
    }

    /// Full hex digest
    pub fn hex(&self) -> &str {
        &self.0
    }

    /// First `len` hex characters (the whole digest if shorter)
    pub fn prefix(&self, len: usize) -> &str {
        &self.0[..len.min(self.0.len())]
    }

    /// Cache key used in `<package>_<key>.<ext>` artifact names
    pub fn artifact_key(&self) -> &str {
        self.prefix(Self::ARTIFACT_LEN)
    }

    /// Cache-busting query value for image URLs
    pub fn fingerprint(&self) -> &str {
        self.prefix(Self::FINGERPRINT_LEN)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
