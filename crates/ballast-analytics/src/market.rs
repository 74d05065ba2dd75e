//! Per-ticker market metrics.
//!
//! Last observed price, mean simple return and annualized volatility for
//! every ticker in a price series, independently of portfolio weights.

use std::collections::BTreeMap;

use ballast_core::PriceSeries;
use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::stats::{mean, sample_std, TRADING_DAYS};

/// Market metrics for a single ticker.
///
/// All three fields are `None` when the ticker has fewer than 2 valid
/// observations, except `last_price` which is reported whenever at least one
/// valid observation exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickerMetrics {
    /// Last valid observed price.
    pub last_price: Option<f64>,

    /// Arithmetic mean of per-period simple returns.
    pub mean_ret: Option<f64>,

    /// Sample standard deviation of returns scaled by √252.
    pub ann_vol: Option<f64>,
}

/// Market metrics keyed by ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarketMetrics {
    /// Per-ticker metrics, ascending ticker order.
    pub metrics: BTreeMap<String, TickerMetrics>,
}

/// Computes per-ticker market metrics from a price series.
///
/// Missing observations are dropped before returns are formed, so the
/// per-ticker return series here runs over consecutive *valid* prices. A
/// period with a non-positive prior price is skipped.
///
/// # Errors
///
/// [`AnalyticsError::InvalidInputShape`] when the series has an empty index.
pub fn compute_market_metrics(prices: &PriceSeries) -> AnalyticsResult<MarketMetrics> {
    if prices.is_empty() {
        return Err(AnalyticsError::invalid_shape("price series has empty index"));
    }

    let mut metrics = BTreeMap::new();
    for (ticker, series) in prices.iter() {
        metrics.insert(ticker.to_string(), ticker_metrics(series));
    }
    Ok(MarketMetrics { metrics })
}

fn ticker_metrics(series: &[Option<f64>]) -> TickerMetrics {
    let valid: Vec<f64> = series.iter().copied().flatten().collect();
    if valid.len() < 2 {
        return TickerMetrics {
            last_price: valid.last().copied(),
            mean_ret: None,
            ann_vol: None,
        };
    }

    let last_price = valid[valid.len() - 1];
    let returns: Vec<f64> = valid
        .windows(2)
        .filter(|pair| pair[0] > 0.0)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect();
    if returns.is_empty() {
        return TickerMetrics {
            last_price: Some(last_price),
            mean_ret: None,
            ann_vol: None,
        };
    }

    TickerMetrics {
        last_price: Some(last_price),
        mean_ret: Some(mean(&returns)),
        ann_vol: Some(sample_std(&returns) * TRADING_DAYS.sqrt()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn series(data: Vec<(&str, Vec<Option<f64>>)>) -> PriceSeries {
        let n = data.first().map_or(0, |(_, v)| v.len());
        let index: Vec<NaiveDate> = (0..n)
            .map(|i| NaiveDate::from_ymd_opt(2025, 1, 2 + i as u32).unwrap())
            .collect();
        PriceSeries::new(index, data.into_iter().map(|(t, v)| (t.to_string(), v))).unwrap()
    }

    #[test]
    fn test_empty_index_rejected() {
        let prices = series(vec![]);
        assert!(matches!(
            compute_market_metrics(&prices).unwrap_err(),
            AnalyticsError::InvalidInputShape { .. }
        ));
    }

    #[test]
    fn test_basic_metrics() {
        let prices = series(vec![("A", vec![Some(10.0), Some(11.0), Some(9.9)])]);
        let report = compute_market_metrics(&prices).unwrap();
        let m = &report.metrics["A"];

        assert_relative_eq!(m.last_price.unwrap(), 9.9, epsilon = 1e-12);
        // Returns: 0.1, -0.1 -> mean 0.
        assert_relative_eq!(m.mean_ret.unwrap(), 0.0, epsilon = 1e-12);
        // Sample std of {0.1, -0.1} is 0.1*sqrt(2).
        let expected_vol = 0.1 * 2f64.sqrt() * 252f64.sqrt();
        assert_relative_eq!(m.ann_vol.unwrap(), expected_vol, epsilon = 1e-9);
    }

    #[test]
    fn test_missing_observations_bridged() {
        // Valid prices 10 and 12 are consecutive after dropping the gap.
        let prices = series(vec![("A", vec![Some(10.0), None, Some(12.0)])]);
        let report = compute_market_metrics(&prices).unwrap();
        let m = &report.metrics["A"];
        assert_relative_eq!(m.mean_ret.unwrap(), 0.2, epsilon = 1e-12);
        // Single return: sample std is 0.
        assert_relative_eq!(m.ann_vol.unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_observation() {
        let prices = series(vec![("A", vec![Some(10.0), None])]);
        let m = &compute_market_metrics(&prices).unwrap().metrics["A"];
        assert_eq!(m.last_price, Some(10.0));
        assert_eq!(m.mean_ret, None);
        assert_eq!(m.ann_vol, None);
    }

    #[test]
    fn test_all_missing() {
        let m = &compute_market_metrics(&series(vec![("A", vec![None, None])]))
            .unwrap()
            .metrics["A"];
        assert_eq!(m.last_price, None);
        assert_eq!(m.mean_ret, None);
        assert_eq!(m.ann_vol, None);
    }

    #[test]
    fn test_non_positive_prior_skipped() {
        let prices = series(vec![("A", vec![Some(-1.0), Some(2.0), Some(4.0)])]);
        let m = &compute_market_metrics(&prices).unwrap().metrics["A"];
        // Only the 2 -> 4 period survives.
        assert_relative_eq!(m.mean_ret.unwrap(), 1.0, epsilon = 1e-12);
    }
}
