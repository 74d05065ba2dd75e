//! Error types for data sources.

use thiserror::Error;

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while loading portfolio or price data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The requested file does not exist.
    #[error("FileNotFound: {path}")]
    FileNotFound {
        /// The path that was requested.
        path: String,
    },

    /// The CSV header lacks a required column.
    #[error("MissingColumn: missing column '{column}' in CSV")]
    MissingColumn {
        /// The column that was expected.
        column: String,
    },

    /// Malformed file content.
    #[error("Parse: {reason}")]
    Parse {
        /// What failed to parse.
        reason: String,
    },

    /// I/O failure while reading a source.
    #[error("Io: {reason}")]
    Io {
        /// The underlying I/O failure.
        reason: String,
    },

    /// An upstream provider reported a failure envelope.
    ///
    /// The message is the provider's error string, carried unchanged so the
    /// envelope can be propagated as-is.
    #[error("{message}")]
    Upstream {
        /// The upstream error string, verbatim.
        message: String,
    },
}

impl FeedError {
    /// Create a file not found error.
    #[must_use]
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a missing column error.
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// Create an upstream propagation error.
    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}
