//! Register result types

use serde::Serialize;

use crate::application::compile::RawUrls;
use crate::domain::entities::CompiledRecord;
use crate::domain::value_objects::AssetKind;

/// How a package is served for the current request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Registered {
    /// Compiled artifacts (and external URLs)
    Compiled(CompiledRecord),
    /// Uncompiled sources
    Raw(RawUrls),
}

impl Registered {
    pub fn is_compiled(&self) -> bool {
        matches!(self, Registered::Compiled(_))
    }

    pub fn urls(&self, kind: AssetKind) -> &[String] {
        match self {
            Registered::Compiled(record) => record.urls(kind),
            Registered::Raw(raw) => raw.urls(kind),
        }
    }

    /// CSS media attribute, if any
    pub fn media(&self) -> Option<&str> {
        match self {
            Registered::Compiled(record) => record
                .part(AssetKind::Style)
                .and_then(|style| style.media.as_deref()),
            Registered::Raw(raw) => raw.media.as_deref(),
        }
    }
}
