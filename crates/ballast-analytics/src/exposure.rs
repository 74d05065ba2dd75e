//! Asset-class exposures vs target.

use std::collections::BTreeMap;

use ballast_core::{AssetClassMap, WeightMap};
use serde::Serialize;

/// Class label for tickers absent from the asset-class map.
pub const UNKNOWN_CLASS: &str = "unknown";

/// Exposure comparison between current and target weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExposureComparison {
    /// Current weight aggregated per asset class.
    pub current: BTreeMap<String, f64>,

    /// Target weight aggregated per asset class.
    pub target: BTreeMap<String, f64>,

    /// Signed `current - target` per asset class.
    pub deltas: BTreeMap<String, f64>,
}

/// Aggregates current and target weights by asset class and diffs them.
///
/// Aggregation is independent per side; unmapped tickers bucket under
/// `"unknown"`. Every class present on either side is reported, with the
/// missing side defaulting to 0.0. No normalization happens here: if either
/// weight map does not sum to 1, the exposures and deltas show that as-is.
#[must_use]
pub fn compare_exposures(
    current: &WeightMap,
    classes: &AssetClassMap,
    target: &WeightMap,
) -> ExposureComparison {
    let current_agg = aggregate(current, classes);
    let target_agg = aggregate(target, classes);

    let mut deltas = BTreeMap::new();
    for class in current_agg.keys().chain(target_agg.keys()) {
        let cur = current_agg.get(class).copied().unwrap_or(0.0);
        let tgt = target_agg.get(class).copied().unwrap_or(0.0);
        deltas.insert(class.clone(), cur - tgt);
    }

    // Report the same class universe on all three maps.
    let mut current_out = BTreeMap::new();
    let mut target_out = BTreeMap::new();
    for class in deltas.keys() {
        current_out.insert(
            class.clone(),
            current_agg.get(class).copied().unwrap_or(0.0),
        );
        target_out.insert(class.clone(), target_agg.get(class).copied().unwrap_or(0.0));
    }

    ExposureComparison {
        current: current_out,
        target: target_out,
        deltas,
    }
}

fn aggregate(weights: &WeightMap, classes: &AssetClassMap) -> BTreeMap<String, f64> {
    let mut agg: BTreeMap<String, f64> = BTreeMap::new();
    for (ticker, weight) in weights.iter() {
        let class = classes
            .get(ticker)
            .map_or(UNKNOWN_CLASS, String::as_str);
        *agg.entry(class.to_string()).or_insert(0.0) += weight;
    }
    agg
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn classes(pairs: &[(&str, &str)]) -> AssetClassMap {
        pairs
            .iter()
            .map(|(t, c)| (t.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn test_aggregation_and_deltas() {
        let current: WeightMap = [("AAPL", 0.4), ("MSFT", 0.3), ("TLT", 0.3)]
            .into_iter()
            .collect();
        let target: WeightMap = [("AAPL", 0.3), ("MSFT", 0.3), ("TLT", 0.4)]
            .into_iter()
            .collect();
        let map = classes(&[("AAPL", "equity"), ("MSFT", "equity"), ("TLT", "bond")]);

        let cmp = compare_exposures(&current, &map, &target);
        assert_relative_eq!(cmp.current["equity"], 0.7, epsilon = 1e-12);
        assert_relative_eq!(cmp.target["equity"], 0.6, epsilon = 1e-12);
        assert_relative_eq!(cmp.deltas["equity"], 0.1, epsilon = 1e-12);
        assert_relative_eq!(cmp.deltas["bond"], -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_class_fallback() {
        let current: WeightMap = [("XYZ", 1.0)].into_iter().collect();
        let cmp = compare_exposures(&current, &AssetClassMap::new(), &WeightMap::new());
        assert_relative_eq!(cmp.current[UNKNOWN_CLASS], 1.0, epsilon = 1e-12);
        assert_relative_eq!(cmp.target[UNKNOWN_CLASS], 0.0, epsilon = 1e-12);
        assert_relative_eq!(cmp.deltas[UNKNOWN_CLASS], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_class_only_in_target() {
        let target: WeightMap = [("GLD", 0.2)].into_iter().collect();
        let map = classes(&[("GLD", "commodity")]);
        let cmp = compare_exposures(&WeightMap::new(), &map, &target);
        assert_relative_eq!(cmp.current["commodity"], 0.0, epsilon = 1e-12);
        assert_relative_eq!(cmp.deltas["commodity"], -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_no_normalization() {
        // Current sums to 2.0; the comparison must reflect that directly.
        let current: WeightMap = [("A", 1.5), ("B", 0.5)].into_iter().collect();
        let target: WeightMap = [("A", 0.5)].into_iter().collect();
        let map = classes(&[("A", "equity"), ("B", "equity")]);
        let cmp = compare_exposures(&current, &map, &target);
        assert_relative_eq!(cmp.current["equity"], 2.0, epsilon = 1e-12);
        assert_relative_eq!(cmp.deltas["equity"], 1.5, epsilon = 1e-12);
    }
}
