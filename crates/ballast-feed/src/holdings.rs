//! CSV portfolio holdings reader.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{FeedError, FeedResult};

/// The ticker universe extracted from a holdings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioHoldings {
    /// Unique tickers, trimmed and sorted ascending.
    pub tickers: Vec<String>,

    /// Total number of data rows in the file, blank tickers included.
    pub row_count: usize,
}

/// Reads the ticker universe from a holdings CSV.
///
/// The file path and the name of the ticker column are required caller
/// configuration; there is no default location. Blank ticker cells are
/// excluded from the ticker list but still counted in `row_count`.
///
/// # Errors
///
/// - [`FeedError::FileNotFound`] when the path does not exist
/// - [`FeedError::MissingColumn`] when the header lacks the ticker column
/// - [`FeedError::Parse`] on malformed CSV content
pub fn read_portfolio_holdings(
    path: impl AsRef<Path>,
    ticker_column: &str,
) -> FeedResult<PortfolioHoldings> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FeedError::file_not_found(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| FeedError::Io {
        reason: e.to_string(),
    })?;

    let headers = reader
        .headers()
        .map_err(|e| FeedError::parse(e.to_string()))?;
    let column = headers
        .iter()
        .position(|h| h == ticker_column)
        .ok_or_else(|| FeedError::missing_column(ticker_column))?;

    let mut tickers = BTreeSet::new();
    let mut row_count = 0usize;
    let mut blank = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| FeedError::parse(e.to_string()))?;
        row_count += 1;
        match record.get(column).map(str::trim) {
            Some(ticker) if !ticker.is_empty() => {
                tickers.insert(ticker.to_string());
            }
            _ => blank += 1,
        }
    }
    if blank > 0 {
        warn!(path = %path.display(), blank, "holdings rows with blank ticker skipped");
    }
    debug!(
        path = %path.display(),
        rows = row_count,
        tickers = tickers.len(),
        "loaded portfolio holdings"
    );

    Ok(PortfolioHoldings {
        tickers: tickers.into_iter().collect(),
        row_count,
    })
}
