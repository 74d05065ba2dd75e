//! Return series value types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-period simple returns for a single ticker.
///
/// One entry shorter than its source price series; a position is `None` when
/// either endpoint price was missing or the prior price was zero.
pub type ReturnSeries = Vec<Option<f64>>;

/// A gap-free portfolio return series with its compounded growth curve.
///
/// Produced by the returns builder: `returns[i]` is the weighted portfolio
/// return for period `i` (0.0 on periods where any constituent return was
/// missing), and `curve[i]` is the running product of `1 + returns[0..=i]`
/// from a base level of 1.0. `index` aligns both to the second and later
/// observation dates of the source prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReturns {
    /// Observation dates for each return period (source `index[1..]`).
    pub index: Vec<NaiveDate>,

    /// Per-period weighted portfolio returns, gap-free.
    pub returns: Vec<f64>,

    /// Cumulative growth levels, base 1.0, never reset.
    pub curve: Vec<f64>,
}

impl PortfolioReturns {
    /// Number of return periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Returns true when the series carries no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Final growth level, if any periods exist.
    #[must_use]
    pub fn final_level(&self) -> Option<f64> {
        self.curve.last().copied()
    }
}
