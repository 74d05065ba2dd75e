//! The component boundary envelope.
//!
//! Every analytic component answers with the same wire shape: a success
//! envelope `{ok: true, ...payload}` or a failure envelope
//! `{ok: false, error: "..."}`. Failures are data to be inspected by the
//! caller, never faults crossing the boundary.

use serde::Serialize;
use std::fmt::Display;

/// A component result envelope.
///
/// Serializes to `{ok: true, ...}` with the payload's fields flattened in,
/// or to `{ok: false, error}` carrying a human-readable reason.
///
/// # Example
///
/// ```rust
/// use ballast_core::Report;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Body { hhi: f64 }
///
/// let json = serde_json::to_value(Report::success(Body { hhi: 0.46 })).unwrap();
/// assert_eq!(json["ok"], true);
/// assert_eq!(json["hhi"], 0.46);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report<T> {
    /// Successful component run with its payload fields flattened in.
    Success {
        /// Always `true`.
        ok: bool,
        /// Component-specific payload.
        #[serde(flatten)]
        body: T,
    },
    /// Failed component run.
    Failure {
        /// Always `false`.
        ok: bool,
        /// Failure kind and cause, human readable.
        error: String,
    },
}

impl<T> Report<T> {
    /// Wraps a payload in a success envelope.
    #[must_use]
    pub fn success(body: T) -> Self {
        Self::Success { ok: true, body }
    }

    /// Wraps an error in a failure envelope.
    #[must_use]
    pub fn failure(error: impl Display) -> Self {
        Self::Failure {
            ok: false,
            error: error.to_string(),
        }
    }

    /// Returns true for a success envelope.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The payload of a success envelope, if any.
    #[must_use]
    pub fn body(&self) -> Option<&T> {
        match self {
            Self::Success { body, .. } => Some(body),
            Self::Failure { .. } => None,
        }
    }

    /// The error string of a failure envelope, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error.as_str()),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Report<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(body) => Self::success(body),
            Err(err) => Self::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Body {
        hhi: f64,
    }

    #[test]
    fn test_success_shape() {
        let json = serde_json::to_value(Report::success(Body { hhi: 0.46 })).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["hhi"], 0.46);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_shape() {
        let report: Report<Body> = Report::failure("EmptySeries: no returns provided");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "EmptySeries: no returns provided");
        assert!(!report.is_ok());
    }

    #[test]
    fn test_from_result() {
        let ok: Report<Body> = Ok::<_, String>(Body { hhi: 0.25 }).into();
        assert!(ok.is_ok());
        let err: Report<Body> = Err::<Body, _>("boom".to_string()).into();
        assert_eq!(err.error(), Some("boom"));
    }
}
