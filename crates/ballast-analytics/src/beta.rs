//! Beta and correlation vs a benchmark.
//!
//! Per-ticker beta and correlation against a benchmark ticker from the same
//! price series, plus a weighted portfolio beta.

use std::collections::BTreeMap;

use ballast_core::{PriceSeries, WeightMap};
use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::returns::compact_returns;
use crate::stats::{population_covariance, population_variance};

/// Minimum usable return observations for a meaningful estimate.
const MIN_OBSERVATIONS: usize = 3;

/// Beta and correlation estimates vs a benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetaCorrelations {
    /// Per-ticker beta, `None` when under 3 aligned observations.
    pub betas: BTreeMap<String, Option<f64>>,

    /// Per-ticker correlation vs the benchmark, `None` when the ticker's
    /// aligned variance is not strictly positive or under 3 aligned
    /// observations.
    pub correlations: BTreeMap<String, Option<f64>>,

    /// Weight-weighted average of non-null betas, normalized by the sum of
    /// the participating weights. `None` when that sum is not positive.
    pub portfolio_beta: Option<f64>,

    /// The benchmark ticker used.
    pub benchmark: String,
}

/// Estimates per-ticker beta/correlation vs a benchmark and portfolio beta.
///
/// Returns for both benchmark and tickers are derived by *dropping*
/// ineligible periods (missing or zero prior price), so series lengths may
/// differ; each ticker is aligned to the benchmark by taking the trailing
/// `min(len(own), len(benchmark))` observations. That right-aligned tail
/// overlap decides which periods enter the covariance and must not be
/// swapped for full index alignment.
///
/// Variances and covariances are population estimators (divisor `n`). Beta
/// and correlation share the same benchmark-variance denominator, computed
/// over the benchmark's *full* return series; only the covariance and the
/// ticker's own variance come from the aligned tails.
///
/// # Errors
///
/// - [`AnalyticsError::BenchmarkMissing`] when the benchmark is not in the series
/// - [`AnalyticsError::InsufficientBenchmarkData`] under 3 benchmark returns
/// - [`AnalyticsError::ZeroVariance`] when benchmark variance is exactly 0
pub fn compute_beta_correlations(
    prices: &PriceSeries,
    weights: &WeightMap,
    benchmark: &str,
) -> AnalyticsResult<BetaCorrelations> {
    let bench_prices = prices
        .prices(benchmark)
        .ok_or_else(|| AnalyticsError::benchmark_missing(benchmark))?;
    let bench_rets = compact_returns(bench_prices);
    if bench_rets.len() < MIN_OBSERVATIONS {
        return Err(AnalyticsError::InsufficientBenchmarkData {
            available: bench_rets.len(),
        });
    }

    let bench_var = population_variance(&bench_rets);
    if bench_var == 0.0 {
        return Err(AnalyticsError::ZeroVariance);
    }

    let mut betas = BTreeMap::new();
    let mut correlations = BTreeMap::new();
    for (ticker, series) in prices.iter() {
        if ticker == benchmark {
            continue;
        }
        let own_rets = compact_returns(series);
        let n = own_rets.len().min(bench_rets.len());
        if n < MIN_OBSERVATIONS {
            betas.insert(ticker.to_string(), None);
            correlations.insert(ticker.to_string(), None);
            continue;
        }

        let own_tail = &own_rets[own_rets.len() - n..];
        let bench_tail = &bench_rets[bench_rets.len() - n..];
        let cov = population_covariance(own_tail, bench_tail);
        let own_var = population_variance(own_tail);

        betas.insert(ticker.to_string(), Some(cov / bench_var));
        // Correlation shares beta's denominator: the full-series benchmark
        // variance, not the trailing tail's, which is already known non-zero.
        let corr = (own_var > 0.0).then(|| cov / (own_var * bench_var).sqrt());
        correlations.insert(ticker.to_string(), corr);
    }

    let mut beta_sum = 0.0;
    let mut weight_sum = 0.0;
    for (ticker, weight) in weights.iter() {
        if let Some(Some(beta)) = betas.get(ticker) {
            beta_sum += weight * beta;
            weight_sum += weight;
        }
    }
    let portfolio_beta = (weight_sum > 0.0).then(|| beta_sum / weight_sum);

    Ok(BetaCorrelations {
        betas,
        correlations,
        portfolio_beta,
        benchmark: benchmark.to_string(),
    })
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

    fn bench_and_single_asset() -> PriceSeries {
        series(vec![
            ("A", vec![Some(10.0), Some(11.0), Some(9.0), Some(12.0)]),
            (
                "BENCH",
                vec![Some(100.0), Some(102.0), Some(101.0), Some(105.0)],
            ),
        ])
    }

    #[test]
    fn test_benchmark_missing() {
        let prices = bench_and_single_asset();
        let weights: WeightMap = [("A", 1.0)].into_iter().collect();
        assert_eq!(
            compute_beta_correlations(&prices, &weights, "SPY").unwrap_err(),
            AnalyticsError::benchmark_missing("SPY")
        );
    }

    #[test]
    fn test_insufficient_benchmark_data() {
        let prices = series(vec![
            ("A", vec![Some(10.0), Some(11.0), Some(9.0)]),
            ("BENCH", vec![Some(100.0), None, Some(101.0)]),
        ]);
        let weights: WeightMap = [("A", 1.0)].into_iter().collect();
        assert_eq!(
            compute_beta_correlations(&prices, &weights, "BENCH").unwrap_err(),
            AnalyticsError::InsufficientBenchmarkData { available: 0 }
        );
    }

    #[test]
    fn test_zero_variance_benchmark() {
        let prices = series(vec![
            ("A", vec![Some(10.0), Some(11.0), Some(9.0), Some(12.0)]),
            (
                "BENCH",
                vec![Some(100.0), Some(100.0), Some(100.0), Some(100.0)],
            ),
        ]);
        let weights: WeightMap = [("A", 1.0)].into_iter().collect();
        assert_eq!(
            compute_beta_correlations(&prices, &weights, "BENCH").unwrap_err(),
            AnalyticsError::ZeroVariance
        );
    }

    #[test]
    fn test_single_asset_portfolio_beta_equals_asset_beta() {
        let prices = bench_and_single_asset();
        let weights: WeightMap = [("A", 1.0)].into_iter().collect();
        let result = compute_beta_correlations(&prices, &weights, "BENCH").unwrap();

        let beta = result.betas["A"].expect("beta should be present");
        assert!(beta.is_finite());
        assert_relative_eq!(result.portfolio_beta.unwrap(), beta, epsilon = 1e-12);
        assert_eq!(result.benchmark, "BENCH");
    }

    #[test]
    fn test_beta_of_scaled_series() {
        // A moves exactly twice the benchmark's return each period.
        let bench = [100.0, 102.0, 101.0, 105.0, 103.0];
        let mut a_level = 50.0;
        let mut a = vec![a_level];
        for pair in bench.windows(2) {
            let r = (pair[1] - pair[0]) / pair[0];
            a_level *= 1.0 + 2.0 * r;
            a.push(a_level);
        }
        let prices = series(vec![
            ("A", a.into_iter().map(Some).collect()),
            ("BENCH", bench.iter().copied().map(Some).collect()),
        ]);
        let weights: WeightMap = [("A", 1.0)].into_iter().collect();
        let result = compute_beta_correlations(&prices, &weights, "BENCH").unwrap();

        assert_relative_eq!(result.betas["A"].unwrap(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(result.correlations["A"].unwrap(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_short_ticker_series_yields_null() {
        let prices = series(vec![
            ("A", vec![None, None, Some(9.0), Some(12.0)]),
            (
                "BENCH",
                vec![Some(100.0), Some(102.0), Some(101.0), Some(105.0)],
            ),
        ]);
        let weights: WeightMap = [("A", 1.0)].into_iter().collect();
        let result = compute_beta_correlations(&prices, &weights, "BENCH").unwrap();

        assert_eq!(result.betas["A"], None);
        assert_eq!(result.correlations["A"], None);
        // No ticker carries a usable beta, so no portfolio beta either.
        assert_eq!(result.portfolio_beta, None);
    }

    #[test]
    fn test_trailing_alignment() {
        // A has a gap early on: 3 usable returns vs the benchmark's 4. The
        // overlap must be the trailing 3 of each.
        let prices = series(vec![
            (
                "A",
                vec![None, Some(10.0), Some(11.0), Some(9.0), Some(12.0)],
            ),
            (
                "BENCH",
                vec![Some(100.0), Some(102.0), Some(101.0), Some(105.0), Some(103.0)],
            ),
        ]);
        let weights: WeightMap = [("A", 1.0)].into_iter().collect();
        let result = compute_beta_correlations(&prices, &weights, "BENCH").unwrap();

        let own: Vec<f64> = vec![(11.0 - 10.0) / 10.0, (9.0 - 11.0) / 11.0, (12.0 - 9.0) / 9.0];
        let bench_all: Vec<f64> = vec![
            0.02,
            (101.0 - 102.0) / 102.0,
            (105.0 - 101.0) / 101.0,
            (103.0 - 105.0) / 105.0,
        ];
        let bench_tail = &bench_all[1..];
        let expected = population_covariance(&own, bench_tail) / population_variance(&bench_all);
        assert_relative_eq!(result.betas["A"].unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_uses_full_benchmark_variance() {
        // A has 3 usable returns against the benchmark's 4, so the aligned
        // tail is shorter than the full benchmark series. The correlation
        // denominator must use the full-series benchmark variance (beta's
        // denominator), not the variance of the trailing tail.
        let prices = series(vec![
            ("A", vec![None, Some(50.0), Some(55.0), Some(52.0), Some(54.0)]),
            (
                "BENCH",
                vec![Some(100.0), Some(110.0), Some(99.0), Some(105.0), Some(105.0)],
            ),
        ]);
        let weights: WeightMap = [("A", 1.0)].into_iter().collect();
        let result = compute_beta_correlations(&prices, &weights, "BENCH").unwrap();

        let own = [0.1, 52.0 / 55.0 - 1.0, 54.0 / 52.0 - 1.0];
        let bench_all = [0.1, -0.1, 105.0 / 99.0 - 1.0, 0.0];
        let bench_tail = &bench_all[1..];
        let cov = population_covariance(&own, bench_tail);
        let expected =
            cov / (population_variance(&own) * population_variance(&bench_all)).sqrt();

        assert_relative_eq!(expected, -0.849001, epsilon = 1e-6);
        assert_relative_eq!(result.correlations["A"].unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_portfolio_beta_normalized_by_participating_weights() {
        let prices = series(vec![
            ("A", vec![Some(10.0), Some(11.0), Some(9.0), Some(12.0)]),
            ("B", vec![None, None, Some(9.0), Some(12.0)]),
            (
                "BENCH",
                vec![Some(100.0), Some(102.0), Some(101.0), Some(105.0)],
            ),
        ]);
        // B has a null beta, so only A's weight participates and the
        // portfolio beta collapses to A's.
        let weights: WeightMap = [("A", 0.4), ("B", 0.6)].into_iter().collect();
        let result = compute_beta_correlations(&prices, &weights, "BENCH").unwrap();
        assert_relative_eq!(
            result.portfolio_beta.unwrap(),
            result.betas["A"].unwrap(),
            epsilon = 1e-12
        );
    }
}
