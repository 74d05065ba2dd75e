//! Error types for domain type construction.

use thiserror::Error;

/// Result type for core type construction.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while validating domain type structure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed series or mapping structure.
    #[error("Invalid input shape: {reason}")]
    InvalidInputShape {
        /// What exactly is malformed.
        reason: String,
    },
}

impl CoreError {
    /// Create an invalid input shape error.
    #[must_use]
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidInputShape {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_shape("value length 3 != index length 4");
        assert!(err.to_string().contains("Invalid input shape"));
        assert!(err.to_string().contains("3 != index length 4"));
    }
}
