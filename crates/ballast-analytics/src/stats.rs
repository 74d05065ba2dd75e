//! Descriptive statistics over return slices.
//!
//! Small numerically-plain helpers shared by the analytic transforms. Two
//! variance conventions are in play and must not be mixed up: risk and
//! market metrics use the sample estimator (divisor `n-1`), the beta
//! estimator uses the population estimator (divisor `n`).

use statrs::distribution::{ContinuousCDF, Normal};

/// Trading periods per year used for annualization.
pub const TRADING_DAYS: f64 = 252.0;

/// One-sided 95% normal quantile, the degraded fallback for parametric VaR.
pub const Z_FALLBACK_95: f64 = 1.65;

/// Arithmetic mean. Returns 0.0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (divisor `n-1`). Returns 0.0 for fewer than 2 values.
#[must_use]
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mu = mean(values);
    values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Sample standard deviation (divisor `n-1`).
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Population variance (divisor `n`). Returns 0.0 for an empty slice.
#[must_use]
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population covariance between two equal-length slices (divisor `n`).
///
/// Returns 0.0 for empty input; callers are responsible for alignment.
#[must_use]
pub fn population_covariance(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.is_empty() {
        return 0.0;
    }
    let mu_x = mean(xs);
    let mu_y = mean(ys);
    xs.iter()
        .zip(ys)
        .map(|(x, y)| (x - mu_x) * (y - mu_y))
        .sum::<f64>()
        / xs.len() as f64
}

/// One-sided standard normal quantile magnitude for a confidence level.
///
/// Computes `|Φ⁻¹(1 - confidence)|`. When the quantile cannot be evaluated
/// to a finite value (confidence outside `(0, 1)`), falls back to the
/// standard 1.65 value used for 95% confidence. That fallback is a known
/// degraded approximation for any other confidence level.
#[must_use]
pub fn one_sided_z(confidence: f64) -> f64 {
    let p = 1.0 - confidence;
    if p <= 0.0 || p >= 1.0 {
        return Z_FALLBACK_95;
    }
    // Normal::new only fails on non-finite parameters, never for (0, 1).
    let z = match Normal::new(0.0, 1.0) {
        Ok(normal) => normal.inverse_cdf(p).abs(),
        Err(_) => return Z_FALLBACK_95,
    };
    if z.is_finite() {
        z
    } else {
        Z_FALLBACK_95
    }
}
