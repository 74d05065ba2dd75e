//! Data-quality validation.
//!
//! Advisory checks on portfolio data: weight-sum tolerance and per-ticker
//! missing-price counts. This component never fails; it always returns a
//! structured list of issues (possibly empty) alongside the statistics, so a
//! downstream decision layer can weigh the evidence instead of being blocked.

use std::collections::BTreeMap;

use ballast_core::{PriceSeries, WeightMap};
use serde::Serialize;

/// Default allowed deviation of the weight sum around 1.0.
pub const DEFAULT_TOLERANCE: f64 = 0.02;

/// Result of the data-quality validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataQualityReport {
    /// Raw sum of all weights, as given.
    pub weights_sum: f64,

    /// Count of missing observations per ticker in the price data.
    pub missing_points: BTreeMap<String, usize>,

    /// Human-readable issues found, empty when the data looks clean.
    pub issues: Vec<String>,
}

impl DataQualityReport {
    /// Returns true when no issue was flagged.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validates weight sum and price completeness.
///
/// Flags an issue when the raw weight sum falls outside
/// `[1 - tolerance, 1 + tolerance]` and one issue per ticker with at least
/// one missing price point.
#[must_use]
pub fn validate_data_quality(
    prices: &PriceSeries,
    weights: &WeightMap,
    tolerance: f64,
) -> DataQualityReport {
    let mut issues = Vec::new();

    let weights_sum = weights.sum();
    if weights_sum < 1.0 - tolerance || weights_sum > 1.0 + tolerance {
        issues.push(format!("Weights sum out of bounds: {weights_sum:.6}"));
    }

    let mut missing_points = BTreeMap::new();
    for (ticker, series) in prices.iter() {
        let missing = series.iter().filter(|v| v.is_none()).count();
        missing_points.insert(ticker.to_string(), missing);
        if missing > 0 {
            issues.push(format!("{ticker}: {missing} missing price points"));
        }
    }

    DataQualityReport {
        weights_sum,
        missing_points,
        issues,
    }
}
