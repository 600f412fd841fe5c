use std::path::PathBuf;

/// Errors from profile lookup and discovery.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// A profile name that cannot be used as a path segment.
    #[error("invalid profile name {name:?}: {reason}")]
    InvalidProfileName { name: String, reason: String },

    /// A mood name that cannot be used inside a file name.
    #[error("invalid mood name {name:?}: {reason}")]
    InvalidMoodName { name: String, reason: String },

    /// Reading a document or listing a directory failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
