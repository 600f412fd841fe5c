use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq)]
pub enum TypeError {
    #[error("phrasing weight cannot be negative: {weight} for {text:?}")]
    NegativeWeight { text: String, weight: f64 },
}

/// Result alias for type operations.
pub type TypeResult<T> = Result<T, TypeError>;
