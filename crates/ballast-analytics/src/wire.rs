//! Wire payloads for the component boundary.
//!
//! Field names and nesting here are a compatibility contract with the
//! original textual interchange and must stay bit-for-bit stable. Rounding
//! (6 decimal places for prices/ratios/metrics, 8 for mean returns, 10 for
//! portfolio returns and curve levels) is applied here and only here;
//! computation results keep full precision.

use std::collections::BTreeMap;

use ballast_core::round::{round_opt, round_to, ROUND_CURVE_DP, ROUND_MEAN_DP, ROUND_METRIC_DP};
use ballast_core::{PortfolioReturns, Report};
use chrono::NaiveDate;
use serde::Serialize;

use crate::beta::BetaCorrelations;
use crate::concentration::ConcentrationMetrics;
use crate::error::AnalyticsResult;
use crate::exposure::ExposureComparison;
use crate::market::MarketMetrics;
use crate::quality::DataQualityReport;
use crate::risk::RiskMetrics;

/// Wraps a component result in the `{ok, ...}` envelope, converting the
/// payload to its wire form.
pub fn into_report<T, B: From<T>>(result: AnalyticsResult<T>) -> Report<B> {
    match result {
        Ok(value) => Report::success(B::from(value)),
        Err(err) => Report::failure(err),
    }
}

/// Wire payload of the returns builder.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioReturnsBody {
    /// Return-period dates (source `index[1:]`).
    pub index: Vec<NaiveDate>,

    /// Per-period portfolio returns, 10 dp.
    pub portfolio_returns: Vec<f64>,

    /// Growth curve levels, 10 dp.
    pub portfolio_curve: Vec<f64>,
}

impl From<PortfolioReturns> for PortfolioReturnsBody {
    fn from(pr: PortfolioReturns) -> Self {
        Self {
            index: pr.index,
            portfolio_returns: pr
                .returns
                .iter()
                .map(|r| round_to(*r, ROUND_CURVE_DP))
                .collect(),
            portfolio_curve: pr
                .curve
                .iter()
                .map(|v| round_to(*v, ROUND_CURVE_DP))
                .collect(),
        }
    }
}

/// Wire form of one ticker's market metrics.
#[derive(Debug, Clone, Serialize)]
pub struct TickerMetricsBody {
    /// Last valid price, 6 dp.
    pub last_price: Option<f64>,

    /// Mean simple return, 8 dp.
    pub mean_ret: Option<f64>,

    /// Annualized volatility, 6 dp.
    pub ann_vol: Option<f64>,
}

/// Wire payload of the market metrics component.
#[derive(Debug, Clone, Serialize)]
pub struct MarketMetricsBody {
    /// Per-ticker metrics.
    pub metrics: BTreeMap<String, TickerMetricsBody>,
}

impl From<MarketMetrics> for MarketMetricsBody {
    fn from(mm: MarketMetrics) -> Self {
        let metrics = mm
            .metrics
            .into_iter()
            .map(|(ticker, m)| {
                (
                    ticker,
                    TickerMetricsBody {
                        last_price: round_opt(m.last_price, ROUND_METRIC_DP),
                        mean_ret: round_opt(m.mean_ret, ROUND_MEAN_DP),
                        ann_vol: round_opt(m.ann_vol, ROUND_METRIC_DP),
                    },
                )
            })
            .collect();
        Self { metrics }
    }
}

/// Wire form of the risk metrics block.
#[derive(Debug, Clone, Serialize)]
pub struct RiskMetricsFields {
    /// Annualized volatility, 6 dp.
    pub ann_vol: f64,

    /// Max drawdown, 6 dp.
    pub max_drawdown: f64,

    /// Daily parametric VaR, 6 dp. The field name is fixed by the wire
    /// contract; `conf_level` is authoritative for the actual level.
    pub var95_daily: f64,

    /// Annualized VaR, 6 dp, when requested.
    pub var_annual: Option<f64>,

    /// Confidence level, verbatim.
    pub conf_level: f64,
}

/// Wire payload of the risk metrics component.
#[derive(Debug, Clone, Serialize)]
pub struct RiskMetricsBody {
    /// The metrics block.
    pub metrics: RiskMetricsFields,
}

impl From<RiskMetrics> for RiskMetricsBody {
    fn from(rm: RiskMetrics) -> Self {
        Self {
            metrics: RiskMetricsFields {
                ann_vol: round_to(rm.ann_vol, ROUND_METRIC_DP),
                max_drawdown: round_to(rm.max_drawdown, ROUND_METRIC_DP),
                var95_daily: round_to(rm.var_daily, ROUND_METRIC_DP),
                var_annual: round_opt(rm.var_annual, ROUND_METRIC_DP),
                conf_level: rm.confidence,
            },
        }
    }
}

/// Wire payload of the beta/correlation estimator.
#[derive(Debug, Clone, Serialize)]
pub struct BetaCorrelationsBody {
    /// Per-ticker beta, 6 dp.
    pub betas: BTreeMap<String, Option<f64>>,

    /// Per-ticker correlation vs the benchmark, 6 dp.
    pub correlations_vs_benchmark: BTreeMap<String, Option<f64>>,

    /// Weighted portfolio beta, 6 dp.
    pub portfolio_beta: Option<f64>,

    /// Benchmark ticker used.
    pub benchmark: String,
}

impl From<BetaCorrelations> for BetaCorrelationsBody {
    fn from(bc: BetaCorrelations) -> Self {
        let round_map = |map: BTreeMap<String, Option<f64>>| {
            map.into_iter()
                .map(|(t, v)| (t, round_opt(v, ROUND_METRIC_DP)))
                .collect()
        };
        Self {
            betas: round_map(bc.betas),
            correlations_vs_benchmark: round_map(bc.correlations),
            portfolio_beta: round_opt(bc.portfolio_beta, ROUND_METRIC_DP),
            benchmark: bc.benchmark,
        }
    }
}

/// Wire payload of the concentration analyzer.
#[derive(Debug, Clone, Serialize)]
pub struct ConcentrationBody {
    /// Top-K `[ticker, weight]` pairs, weights 6 dp.
    pub top_k: Vec<(String, f64)>,

    /// Herfindahl-Hirschman Index, 6 dp.
    pub hhi: f64,
}

impl From<ConcentrationMetrics> for ConcentrationBody {
    fn from(cm: ConcentrationMetrics) -> Self {
        Self {
            top_k: cm
                .top_k
                .into_iter()
                .map(|(t, w)| (t, round_to(w, ROUND_METRIC_DP)))
                .collect(),
            hhi: round_to(cm.hhi, ROUND_METRIC_DP),
        }
    }
}

/// Wire payload of the exposure comparator.
#[derive(Debug, Clone, Serialize)]
pub struct ExposureBody {
    /// Current exposure per asset class, 6 dp.
    pub current_exposures: BTreeMap<String, f64>,

    /// Target exposure per asset class, 6 dp.
    pub target_exposures: BTreeMap<String, f64>,

    /// Signed `current - target` per asset class, 6 dp.
    pub deltas: BTreeMap<String, f64>,
}

impl From<ExposureComparison> for ExposureBody {
    fn from(ec: ExposureComparison) -> Self {
        let round_map = |map: BTreeMap<String, f64>| {
            map.into_iter()
                .map(|(c, v)| (c, round_to(v, ROUND_METRIC_DP)))
                .collect()
        };
        Self {
            current_exposures: round_map(ec.current),
            target_exposures: round_map(ec.target),
            deltas: round_map(ec.deltas),
        }
    }
}

/// Wire payload of the data-quality validator.
#[derive(Debug, Clone, Serialize)]
pub struct DataQualityBody {
    /// Raw weight sum, 6 dp.
    pub weights_sum: f64,

    /// Missing observation count per ticker.
    pub missing_points: BTreeMap<String, usize>,

    /// Issues found, possibly empty.
    pub issues: Vec<String>,
}

impl From<DataQualityReport> for DataQualityBody {
    fn from(dq: DataQualityReport) -> Self {
        Self {
            weights_sum: round_to(dq.weights_sum, ROUND_METRIC_DP),
            missing_points: dq.missing_points,
            issues: dq.issues,
        }
    }
}
