//! # Ballast Analytics
//!
//! Risk and exposure analytics for the Ballast portfolio engine.
//!
//! Seven independent, statelessly-composed transforms over the value types
//! from `ballast-core`:
//!
//! - **Returns builder**: portfolio return series + growth curve
//! - **Market metrics**: per-ticker last price, mean return, annualized vol
//! - **Risk metrics**: annualized vol, max drawdown, parametric VaR
//! - **Beta/correlation**: per-ticker vs a benchmark, weighted portfolio beta
//! - **Concentration**: Top-K weights and HHI
//! - **Exposure comparator**: asset-class exposures vs target
//! - **Data quality**: advisory weight-sum and completeness checks
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every transform is a side-effect-free function of
//!   its inputs, safe to call concurrently with different inputs
//! - **Typed failures**: a closed [`AnalyticsError`] enumeration instead of
//!   stringified faults; the [`wire`] module turns results into the
//!   `{ok, ...}` envelope
//! - **Data flows downstream only**: the returns builder feeds risk metrics;
//!   nothing else depends on another transform's output
//!
//! ## Quick Start
//!
//! ```rust
//! use ballast_analytics::prelude::*;
//! use chrono::NaiveDate;
//!
//! let index: Vec<NaiveDate> = (2..6)
//!     .map(|d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap())
//!     .collect();
//! let prices = PriceSeries::new(
//!     index,
//!     [("AAPL".to_string(), vec![Some(10.0), Some(11.0), Some(9.0), Some(12.0)])],
//! )
//! .unwrap();
//! let weights: WeightMap = [("AAPL", 1.0)].into_iter().collect();
//!
//! let returns = build_portfolio_returns(&prices, &weights).unwrap();
//! let risk = compute_portfolio_risk(&returns, RiskOptions::default()).unwrap();
//! assert!(risk.max_drawdown <= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod beta;
pub mod concentration;
pub mod error;
pub mod exposure;
pub mod market;
pub mod quality;
pub mod returns;
pub mod risk;
pub mod stats;
pub mod wire;

// Re-export error types at crate root
pub use error::{AnalyticsError, AnalyticsResult};

// Re-export transforms and their result types
pub use beta::{compute_beta_correlations, BetaCorrelations};
pub use concentration::{compute_concentration, ConcentrationMetrics, DEFAULT_TOP_K};
pub use exposure::{compare_exposures, ExposureComparison, UNKNOWN_CLASS};
pub use market::{compute_market_metrics, MarketMetrics, TickerMetrics};
pub use quality::{validate_data_quality, DataQualityReport, DEFAULT_TOLERANCE};
pub use returns::{aligned_returns, build_portfolio_returns, compact_returns, RENORMALIZE_BAND};
pub use risk::{
    compound_curve, compute_portfolio_risk, compute_risk_metrics, max_drawdown, RiskMetrics,
    RiskOptions,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use ballast_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    pub use crate::beta::{compute_beta_correlations, BetaCorrelations};
    pub use crate::concentration::{compute_concentration, ConcentrationMetrics};
    pub use crate::exposure::{compare_exposures, ExposureComparison};
    pub use crate::market::{compute_market_metrics, MarketMetrics, TickerMetrics};
    pub use crate::quality::{validate_data_quality, DataQualityReport};
    pub use crate::returns::build_portfolio_returns;
    pub use crate::risk::{compute_portfolio_risk, compute_risk_metrics, RiskMetrics, RiskOptions};
    pub use crate::wire::into_report;

    // Re-export commonly used types from the core crate
    pub use ballast_core::{
        AssetClassMap, PortfolioReturns, PriceSeries, Report, ReturnSeries, WeightMap,
    };
}
