//! Price history sources.
//!
//! The analytics core consumes a validated [`PriceSeries`]; this module
//! defines the provider seam and a JSON-document implementation suited for
//! tests, EOD snapshots and cached downloads. A live provider implements
//! [`PriceSource`] against its own transport.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ballast_core::PriceSeries;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::error::{FeedError, FeedResult};

/// A provider of historical prices for a ticker universe.
pub trait PriceSource {
    /// Fetches an aligned price series for the tickers over a period at an
    /// interval (provider-specific notations such as `"1y"` / `"1d"`).
    ///
    /// # Errors
    ///
    /// Provider-specific [`FeedError`]; an upstream failure envelope must be
    /// surfaced as [`FeedError::Upstream`] with its message unchanged.
    fn fetch(&self, tickers: &[String], period: &str, interval: &str) -> FeedResult<PriceSeries>;
}

/// The `{ok, index, data}` price document shape.
#[derive(Debug, Deserialize)]
struct PriceDocument {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    index: Vec<NaiveDate>,
    #[serde(default)]
    data: BTreeMap<String, Vec<Option<f64>>>,
}

/// Parses a price document into a validated series.
///
/// Restricts to `tickers` when non-empty; an empty slice keeps every ticker
/// in the document.
///
/// # Errors
///
/// - [`FeedError::Upstream`] when the document is a failure envelope; the
///   upstream error string is carried verbatim
/// - [`FeedError::Parse`] on malformed JSON or a structurally invalid series
pub fn parse_price_document(json: &str, tickers: &[String]) -> FeedResult<PriceSeries> {
    let doc: PriceDocument =
        serde_json::from_str(json).map_err(|e| FeedError::parse(e.to_string()))?;
    if !doc.ok {
        return Err(FeedError::upstream(
            doc.error
                .unwrap_or_else(|| "price document not ok".to_string()),
        ));
    }

    let data = doc
        .data
        .into_iter()
        .filter(|(t, _)| tickers.is_empty() || tickers.iter().any(|want| want == t));
    PriceSeries::new(doc.index, data).map_err(|e| FeedError::parse(e.to_string()))
}

/// A [`PriceSource`] backed by a JSON price document on disk.
#[derive(Debug, Clone)]
pub struct JsonPriceSource {
    path: PathBuf,
}

impl JsonPriceSource {
    /// Creates a source reading from the given document path.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PriceSource for JsonPriceSource {
    fn fetch(&self, tickers: &[String], period: &str, interval: &str) -> FeedResult<PriceSeries> {
        if !self.path.exists() {
            return Err(FeedError::file_not_found(self.path.display().to_string()));
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| FeedError::Io {
            reason: e.to_string(),
        })?;
        let series = parse_price_document(&content, tickers)?;
        debug!(
            path = %self.path.display(),
            period,
            interval,
            dates = series.len(),
            "loaded price document"
        );
        Ok(series)
    }
}
