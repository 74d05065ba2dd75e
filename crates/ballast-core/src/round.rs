//! Presentation rounding.
//!
//! The wire contract fixes decimal precision per field: 6 places for prices,
//! ratios and metrics, 8 for mean returns, 10 for per-period portfolio
//! returns and curve levels. Rounding is applied only when building wire
//! payloads; internal accumulation always runs at full precision.

/// Decimal places for prices, ratios and headline metrics.
pub const ROUND_METRIC_DP: i32 = 6;

/// Decimal places for mean returns.
pub const ROUND_MEAN_DP: i32 = 8;

/// Decimal places for per-period portfolio returns and curve levels.
pub const ROUND_CURVE_DP: i32 = 10;

/// Rounds to `dp` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round() / factor
}

/// Rounds an optional value, passing `None` through.
#[must_use]
pub fn round_opt(value: Option<f64>, dp: i32) -> Option<f64> {
    value.map(|v| round_to(v, dp))
}
