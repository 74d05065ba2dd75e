//! Core domain types.

mod returns;
mod series;
mod weights;

pub use returns::{PortfolioReturns, ReturnSeries};
pub use series::PriceSeries;
pub use weights::{AssetClassMap, WeightMap};
