//! Portfolio returns construction.
//!
//! Turns an aligned price series and a weight map into a gap-free portfolio
//! return series and its compounded growth curve.

use ballast_core::{PortfolioReturns, PriceSeries, ReturnSeries, WeightMap};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Half-width of the band around 1.0 inside which raw weights are used as
/// given; outside it they are renormalized to sum exactly to 1.0.
pub const RENORMALIZE_BAND: f64 = 0.02;

/// Position-aligned simple returns for one price vector.
///
/// The result is one entry shorter than `prices`. Position `i` holds
/// `(p[i+1] - p[i]) / p[i]` when both prices are present and `p[i]` is
/// non-zero, `None` otherwise.
#[must_use]
pub fn aligned_returns(prices: &[Option<f64>]) -> ReturnSeries {
    prices
        .windows(2)
        .map(|pair| match (pair[0], pair[1]) {
            (Some(p0), Some(p1)) if p0 != 0.0 => Some((p1 - p0) / p0),
            _ => None,
        })
        .collect()
}

/// Simple returns with ineligible periods dropped instead of kept as gaps.
///
/// Same eligibility rule as [`aligned_returns`]; the output may therefore be
/// shorter than `prices.len() - 1`. This is the derivation the beta
/// estimator uses.
#[must_use]
pub fn compact_returns(prices: &[Option<f64>]) -> Vec<f64> {
    aligned_returns(prices).into_iter().flatten().collect()
}

/// Builds the portfolio return series and growth curve.
///
/// Restricts to tickers present in both inputs (failing with
/// [`AnalyticsError::NoOverlap`] when none survive), renormalizes weights
/// only when their raw sum falls outside ±2% of 1.0, and computes each
/// period's portfolio return as the weight-sum of per-ticker returns.
///
/// A period where any surviving ticker has no return is reported as 0.0, a
/// deliberate fail-safe flat assumption: downstream risk metrics require a
/// gap-free series, and the data-quality validator is the place where gaps
/// are surfaced.
///
/// # Errors
///
/// - [`AnalyticsError::NoOverlap`] when prices and weights share no ticker
/// - [`AnalyticsError::InvalidInputShape`] when surviving weights sum to 0
pub fn build_portfolio_returns(
    prices: &PriceSeries,
    weights: &WeightMap,
) -> AnalyticsResult<PortfolioReturns> {
    let tickers: Vec<&str> = prices.tickers().filter(|t| weights.contains(t)).collect();
    if tickers.is_empty() {
        return Err(AnalyticsError::NoOverlap);
    }

    let per_ticker: Vec<ReturnSeries> = tickers
        .iter()
        .map(|t| aligned_returns(prices.prices(t).unwrap_or(&[])))
        .collect();
    let periods = prices.len().saturating_sub(1);

    let raw_sum: f64 = tickers.iter().filter_map(|t| weights.get(t)).sum();
    let effective: Vec<f64> = if (raw_sum - 1.0).abs() <= RENORMALIZE_BAND {
        tickers
            .iter()
            .map(|t| weights.get(t).unwrap_or(0.0))
            .collect()
    } else {
        if raw_sum == 0.0 {
            return Err(AnalyticsError::invalid_shape(
                "overlapping weights sum to 0, cannot renormalize",
            ));
        }
        tickers
            .iter()
            .map(|t| weights.get(t).unwrap_or(0.0) / raw_sum)
            .collect()
    };

    let mut returns = Vec::with_capacity(periods);
    for i in 0..periods {
        let mut acc = 0.0;
        let mut complete = true;
        for (series, weight) in per_ticker.iter().zip(&effective) {
            match series[i] {
                Some(r) => acc += weight * r,
                None => {
                    complete = false;
                    break;
                }
            }
        }
        returns.push(if complete { acc } else { 0.0 });
    }

    let mut curve = Vec::with_capacity(periods);
    let mut level = 1.0;
    for r in &returns {
        level *= 1.0 + r;
        curve.push(level);
    }

    Ok(PortfolioReturns {
        index: prices.index().iter().skip(1).copied().collect(),
        returns,
        curve,
    })
}
