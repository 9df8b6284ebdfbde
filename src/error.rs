use thiserror::Error;

use crate::db::StoreError;
use crate::indicators::IndicatorError;
use crate::services::market_data::MarketDataError;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
