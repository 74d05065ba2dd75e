//! Portfolio risk metrics.
//!
//! Annualized volatility, maximum drawdown and parametric Value-at-Risk over
//! a gap-free portfolio return series.

use ballast_core::PortfolioReturns;
use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::stats::{mean, one_sided_z, sample_std, TRADING_DAYS};

/// Options for the risk metrics computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskOptions {
    /// Confidence level for parametric VaR.
    pub confidence: f64,

    /// Also report VaR scaled by √252.
    pub annualize_var: bool,
}

impl Default for RiskOptions {
    fn default() -> Self {
        Self {
            confidence: 0.95,
            annualize_var: true,
        }
    }
}

/// Portfolio risk metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMetrics {
    /// Sample standard deviation of returns scaled by √252.
    pub ann_vol: f64,

    /// Most negative drawdown of the growth curve from its running peak.
    /// Always ≤ 0; 0 when the curve never falls below a prior peak.
    pub max_drawdown: f64,

    /// Parametric daily VaR: `mean − z·std` at the requested confidence.
    pub var_daily: f64,

    /// Daily VaR scaled by √252, when annualization was requested.
    pub var_annual: Option<f64>,

    /// The confidence level, echoed back verbatim.
    pub confidence: f64,
}

/// Computes risk metrics from a return series and an optional growth curve.
///
/// When no curve is supplied one is compounded from the returns at base 1.0.
/// The normal quantile for VaR comes from the standard normal inverse CDF;
/// when that is not evaluable for the requested confidence the 1.65 value
/// used for 95% confidence stands in, a degraded approximation for any other
/// level.
///
/// # Errors
///
/// [`AnalyticsError::EmptySeries`] when `returns` is empty.
pub fn compute_risk_metrics(
    returns: &[f64],
    curve: Option<&[f64]>,
    options: RiskOptions,
) -> AnalyticsResult<RiskMetrics> {
    if returns.is_empty() {
        return Err(AnalyticsError::EmptySeries);
    }

    let mu = mean(returns);
    let std = sample_std(returns);
    let ann_vol = std * TRADING_DAYS.sqrt();

    let compounded;
    let curve = match curve {
        Some(c) => c,
        None => {
            compounded = compound_curve(returns);
            &compounded
        }
    };
    let max_drawdown = max_drawdown(curve);

    let z = one_sided_z(options.confidence);
    let var_daily = mu - z * std;
    let var_annual = options
        .annualize_var
        .then(|| var_daily * TRADING_DAYS.sqrt());

    Ok(RiskMetrics {
        ann_vol,
        max_drawdown,
        var_daily,
        var_annual,
        confidence: options.confidence,
    })
}

/// Computes risk metrics directly from a built portfolio return series.
///
/// # Errors
///
/// [`AnalyticsError::EmptySeries`] when the series carries no periods.
pub fn compute_portfolio_risk(
    portfolio: &PortfolioReturns,
    options: RiskOptions,
) -> AnalyticsResult<RiskMetrics> {
    compute_risk_metrics(&portfolio.returns, Some(&portfolio.curve), options)
}

/// Compounds a growth curve from returns, base level 1.0.
#[must_use]
pub fn compound_curve(returns: &[f64]) -> Vec<f64> {
    let mut level = 1.0;
    returns
        .iter()
        .map(|r| {
            level *= 1.0 + r;
            level
        })
        .collect()
}

/// Most negative drawdown of a growth curve from its running peak.
#[must_use]
pub fn max_drawdown(curve: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0;
    for &value in curve {
        if value > peak {
            peak = value;
        }
        let drawdown = value / peak - 1.0;
        if drawdown < worst {
            worst = drawdown;
        }
    }
    worst
}
