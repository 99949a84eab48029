//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant describes caller input that was rejected. None of them are
/// transient, so nothing in the workspace retries on them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (negative cost, unparsable date, bad config).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A positional index pointed outside a collection.
    #[error("index {index} out of range (len: {len})")]
    OutOfRange { index: usize, len: usize },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_context() {
        assert_eq!(
            DomainError::validation("cost must be >= 0").to_string(),
            "validation failed: cost must be >= 0"
        );
        assert_eq!(
            DomainError::out_of_range(7, 3).to_string(),
            "index 7 out of range (len: 3)"
        );
    }
}
