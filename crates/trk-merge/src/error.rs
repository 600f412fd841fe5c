//! Error types for merge operations.

use thiserror::Error;

/// Errors that can occur while merging two configuration values.
///
/// Every variant signals a programming defect (two unrelated shapes were
/// combined), never bad profile content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    /// The overlay's concrete type differs from the primary's.
    #[error("{expected} cannot be merged with {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Convenience type alias for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;
