//! # Ballast Core
//!
//! Domain types for the Ballast portfolio analytics engine.
//!
//! This crate defines the value types exchanged between analytic transforms
//! and the wire envelope every component boundary speaks:
//!
//! - **PriceSeries**: an ascending date index paired with per-ticker price
//!   vectors; missing observations are representable, never dropped
//! - **WeightMap**: ticker to portfolio weight, no construction invariant
//! - **PortfolioReturns**: a gap-free portfolio return series and its
//!   compounded growth curve
//! - **Report**: the `{ok: true, ...}` / `{ok: false, error}` envelope
//!
//! ## Design Philosophy
//!
//! - **Value types**: validated at construction, immutable afterwards
//! - **No I/O**: producers live in `ballast-feed`, consumers in
//!   `ballast-analytics`
//! - **Presentation split**: rounding belongs to the wire layer, never to
//!   computation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod report;
pub mod round;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use report::Report;
pub use types::{AssetClassMap, PortfolioReturns, PriceSeries, ReturnSeries, WeightMap};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::report::Report;
    pub use crate::round::{round_to, ROUND_CURVE_DP, ROUND_MEAN_DP, ROUND_METRIC_DP};
    pub use crate::types::{AssetClassMap, PortfolioReturns, PriceSeries, ReturnSeries, WeightMap};
    pub use chrono::NaiveDate;
}
