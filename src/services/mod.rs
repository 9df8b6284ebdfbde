//! External collaborators: market data sources.

pub mod market_data;

pub use market_data::{CsvMarketDataSource, MarketDataError, MarketDataSource};
