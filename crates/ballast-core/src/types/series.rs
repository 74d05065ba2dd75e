//! Aligned historical price series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An aligned time series of prices for a set of tickers.
///
/// The `index` is an ascending, unique sequence of observation dates; every
/// ticker's price vector has exactly `index.len()` entries. A missing
/// observation is an explicit `None`, never a dropped row, so positions stay
/// comparable across tickers.
///
/// # Example
///
/// ```rust
/// use ballast_core::PriceSeries;
/// use chrono::NaiveDate;
///
/// let index = vec![
///     NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
/// ];
/// let series = PriceSeries::new(index, [("AAPL".to_string(), vec![Some(242.1), Some(243.4)])])
///     .unwrap();
/// assert_eq!(series.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    index: Vec<NaiveDate>,
    data: BTreeMap<String, Vec<Option<f64>>>,
}

impl PriceSeries {
    /// Creates a validated price series.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInputShape`] when the index is not
    /// strictly ascending or any price vector's length differs from the
    /// index length.
    pub fn new(
        index: Vec<NaiveDate>,
        data: impl IntoIterator<Item = (String, Vec<Option<f64>>)>,
    ) -> CoreResult<Self> {
        for pair in index.windows(2) {
            if pair[1] <= pair[0] {
                return Err(CoreError::invalid_shape(format!(
                    "index not strictly ascending at {} -> {}",
                    pair[0], pair[1]
                )));
            }
        }

        let data: BTreeMap<String, Vec<Option<f64>>> = data.into_iter().collect();
        for (ticker, values) in &data {
            if values.len() != index.len() {
                return Err(CoreError::invalid_shape(format!(
                    "'{}' has {} values for {} index entries",
                    ticker,
                    values.len(),
                    index.len()
                )));
            }
        }

        Ok(Self { index, data })
    }

    /// The observation dates.
    #[must_use]
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// Number of observation dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true when the series holds no observation dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All tickers present in the series, ascending.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// The price vector for a ticker, if present.
    #[must_use]
    pub fn prices(&self, ticker: &str) -> Option<&[Option<f64>]> {
        self.data.get(ticker).map(Vec::as_slice)
    }

    /// Ticker/price-vector pairs in ascending ticker order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.data.iter().map(|(t, v)| (t.as_str(), v.as_slice()))
    }

    /// Returns true when the series carries the ticker.
    #[must_use]
    pub fn contains(&self, ticker: &str) -> bool {
        self.data.contains_key(ticker)
    }
}
