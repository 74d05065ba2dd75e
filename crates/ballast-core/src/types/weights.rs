//! Portfolio weights and asset-class classification.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from ticker to asset-class label.
///
/// Labels are free-form strings ("equity", "bond", "cash", ...). Tickers
/// absent from the map are treated as class `"unknown"` by consumers.
pub type AssetClassMap = BTreeMap<String, String>;

/// A mapping from ticker to portfolio weight.
///
/// No invariant is enforced at construction: weights may be negative and may
/// not sum to 1. Consumers decide their own tolerance policy. Iteration is
/// always in ascending ticker order, which makes tie-breaking and wire output
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMap(BTreeMap<String, f64>);

impl WeightMap {
    /// Creates an empty weight map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The weight for a ticker, if mapped.
    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<f64> {
        self.0.get(ticker).copied()
    }

    /// Returns true when the ticker carries a weight.
    #[must_use]
    pub fn contains(&self, ticker: &str) -> bool {
        self.0.contains_key(ticker)
    }

    /// Inserts or replaces a weight.
    pub fn insert(&mut self, ticker: impl Into<String>, weight: f64) {
        self.0.insert(ticker.into(), weight);
    }

    /// Number of weighted tickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no ticker is weighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all weights, as given.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    /// Ticker/weight pairs in ascending ticker order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(t, w)| (t.as_str(), *w))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(t, w)| (t.into(), w)).collect())
    }
}
