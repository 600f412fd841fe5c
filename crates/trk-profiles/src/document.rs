use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Where a profile document was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentOrigin {
    /// User-editable file on disk.
    External,
    /// Compiled into the binary.
    Bundled,
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External => f.write_str("external"),
            Self::Bundled => f.write_str("bundled"),
        }
    }
}

/// The raw text of one overlay document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDocument {
    pub profile: String,
    pub file_name: String,
    pub origin: DocumentOrigin,
    /// Filesystem path, or a virtual path for bundled documents.
    pub path: PathBuf,
    pub contents: String,
}
