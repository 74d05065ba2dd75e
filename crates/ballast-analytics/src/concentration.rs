//! Portfolio concentration metrics.

use ballast_core::WeightMap;
use serde::Serialize;

/// Default number of top positions reported.
pub const DEFAULT_TOP_K: usize = 5;

/// Top-K weights and Herfindahl-Hirschman Index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcentrationMetrics {
    /// The K largest (ticker, weight) pairs, descending by weight.
    pub top_k: Vec<(String, f64)>,

    /// Sum of squared weights over the full weight set.
    pub hhi: f64,
}

/// Computes Top-K weights and the HHI.
///
/// `top_k` is floored to at least 1. Ranking is descending by weight with
/// ties broken by ticker ascending (the weight map iterates in ticker order
/// and the sort is stable, so equal weights keep that order). The HHI sums
/// squared weights over all positions, not just the reported top; weights
/// are trusted as given, with no clamping.
#[must_use]
pub fn compute_concentration(weights: &WeightMap, top_k: usize) -> ConcentrationMetrics {
    let mut ranked: Vec<(String, f64)> = weights
        .iter()
        .map(|(t, w)| (t.to_string(), w))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let hhi = weights.iter().map(|(_, w)| w * w).sum();
    ranked.truncate(top_k.max(1));

    ConcentrationMetrics { top_k: ranked, hhi }
}
