//! # Ballast Feed
//!
//! File-backed portfolio and price data sources for the Ballast engine.
//!
//! The analytics core is pure and performs no I/O; this crate supplies its
//! two input shapes from files:
//!
//! - **Holdings**: a CSV reader extracting the ticker universe and row count
//! - **Prices**: a [`PriceSource`] trait with a JSON-document implementation
//!   that parses the `{ok, index, data}` wire shape
//!
//! Upstream providers speak the same `{ok: false, error}` failure envelope
//! as the core; this crate propagates those errors verbatim rather than
//! rewrapping them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod holdings;
pub mod prices;

pub use error::{FeedError, FeedResult};
pub use holdings::{read_portfolio_holdings, PortfolioHoldings};
pub use prices::{parse_price_document, JsonPriceSource, PriceSource};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FeedError, FeedResult};
    pub use crate::holdings::{read_portfolio_holdings, PortfolioHoldings};
    pub use crate::prices::{parse_price_document, JsonPriceSource, PriceSource};
    pub use ballast_core::{PriceSeries, Report, WeightMap};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = FeedError::missing_column("ticker");
        assert!(err.to_string().contains("MissingColumn"));
    }
}
