//! Asset kind value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two kinds of asset a package can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// JavaScript
    Script,
    /// CSS
    Style,
}

impl AssetKind {
    /// Both kinds in compilation order
    pub const ALL: [AssetKind; 2] = [AssetKind::Script, AssetKind::Style];

    /// File extension (also the `--type` argument given to minifiers)
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKind::Script => "js",
            AssetKind::Style => "css",
        }
    }

    /// Text appended after every combined source file
    ///
    /// Scripts get a `;` so a file that forgot its trailing semicolon cannot
    /// merge with the first statement of the next file.
    pub fn terminator(&self) -> &'static str {
        match self {
            AssetKind::Script => ";\n",
            AssetKind::Style => "\n",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
