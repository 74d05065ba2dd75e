//! Error types for analytic transforms.
//!
//! Every component validates its own preconditions and surfaces one of these
//! closed kinds; callers turn them into failure envelopes via
//! [`Report`](ballast_core::Report) rather than letting faults cross the
//! component boundary.

use ballast_core::CoreError;
use thiserror::Error;

/// Result type for analytic operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during analytic transforms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Malformed series or mapping structure.
    #[error("InvalidInputShape: {reason}")]
    InvalidInputShape {
        /// What exactly is malformed.
        reason: String,
    },

    /// No common tickers between price data and weights.
    #[error("NoOverlap: no overlapping tickers between prices and weights")]
    NoOverlap,

    /// The return series carries no observations.
    #[error("EmptySeries: no returns provided")]
    EmptySeries,

    /// The requested benchmark ticker is absent from the price data.
    #[error("BenchmarkMissing: benchmark '{ticker}' not in prices data")]
    BenchmarkMissing {
        /// The benchmark that was requested.
        ticker: String,
    },

    /// Fewer than 3 usable benchmark returns.
    #[error("InsufficientBenchmarkData: {available} benchmark returns, need at least 3")]
    InsufficientBenchmarkData {
        /// How many usable returns the benchmark produced.
        available: usize,
    },

    /// Degenerate benchmark with zero return variance.
    #[error("ZeroVariance: zero variance on benchmark returns")]
    ZeroVariance,
}

impl AnalyticsError {
    /// Create an invalid input shape error.
    #[must_use]
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidInputShape {
            reason: reason.into(),
        }
    }

    /// Create a benchmark missing error.
    #[must_use]
    pub fn benchmark_missing(ticker: impl Into<String>) -> Self {
        Self::BenchmarkMissing {
            ticker: ticker.into(),
        }
    }
}

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInputShape { reason } => Self::InvalidInputShape { reason },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_kind() {
        assert!(AnalyticsError::NoOverlap.to_string().starts_with("NoOverlap"));
        assert!(AnalyticsError::EmptySeries
            .to_string()
            .starts_with("EmptySeries"));
        let err = AnalyticsError::benchmark_missing("SPY");
        assert!(err.to_string().contains("'SPY'"));
        let err = AnalyticsError::InsufficientBenchmarkData { available: 2 };
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_from_core_error() {
        let core = CoreError::invalid_shape("ragged");
        let err: AnalyticsError = core.into();
        assert!(matches!(err, AnalyticsError::InvalidInputShape { .. }));
    }
}
