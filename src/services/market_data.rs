//! Market data source interface and a flat-file implementation.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Bar, KlinePeriod};

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("no bars available for {symbol} at {period}")]
    NotFound { symbol: String, period: KlinePeriod },

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub trait MarketDataSource {
    /// Historical bars for `symbol` at `period` with dates in `[start, end]`,
    /// sorted ascending by time.
    fn fetch_bars(
        &self,
        symbol: &str,
        period: KlinePeriod,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, MarketDataError>;
}

/// `(today - days, today)` in UTC.
pub fn lookback_range(days: i64) -> (NaiveDate, NaiveDate) {
    lookback_range_from(Utc::now().date_naive(), days)
}

pub fn lookback_range_from(today: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(days), today)
}

/// Reads raw bar exports named `{symbol}_{K_xxM}.csv` from a directory.
///
/// Only the `timestamp` (or `time_key`) and `close` columns are used; any
/// other columns are ignored.
pub struct CsvMarketDataSource {
    dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawBar {
    #[serde(alias = "time_key")]
    timestamp: String,
    close: f64,
}

impl CsvMarketDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_all(&self, path: &Path) -> Result<Vec<Bar>, MarketDataError> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let mut bars = Vec::new();
        for row in reader.deserialize::<RawBar>() {
            let raw = row?;
            let timestamp = parse_timestamp(&raw.timestamp)
                .ok_or_else(|| MarketDataError::InvalidTimestamp(raw.timestamp.clone()))?;
            bars.push(Bar::new(timestamp, raw.close));
        }
        Ok(bars)
    }
}

impl MarketDataSource for CsvMarketDataSource {
    fn fetch_bars(
        &self,
        symbol: &str,
        period: KlinePeriod,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, MarketDataError> {
        let path = self.dir.join(period.file_name(symbol));
        if !path.exists() {
            return Err(MarketDataError::NotFound {
                symbol: symbol.to_string(),
                period,
            });
        }

        let mut bars: Vec<Bar> = self
            .read_all(&path)?
            .into_iter()
            .filter(|bar| {
                let date = bar.timestamp.date_naive();
                start <= date && date <= end
            })
            .collect();

        if bars.windows(2).any(|w| w[0].timestamp > w[1].timestamp) {
            warn!(symbol, period = %period, "Bars out of order, sorting by timestamp");
            bars.sort_by_key(|bar| bar.timestamp);
        }

        debug!(symbol, period = %period, count = bars.len(), path = %path.display(), "Loaded bars");
        Ok(bars)
    }
}

/// RFC 3339, or `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DD` taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}
