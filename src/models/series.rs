use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::period::KlinePeriod;

/// One sampled price bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl Bar {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// A bar together with its derived indicator columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub macd_bar: f64,
    pub ma_fast: f64,
    pub ma_slow: f64,
    pub ma_diff: f64,
}

impl SeriesRecord {
    pub fn get(&self, field: SeriesField) -> f64 {
        match field {
            SeriesField::Close => self.close,
            SeriesField::MacdBar => self.macd_bar,
            SeriesField::MaFast => self.ma_fast,
            SeriesField::MaSlow => self.ma_slow,
            SeriesField::MaDiff => self.ma_diff,
        }
    }
}

/// Numeric columns of a [`SeriesRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesField {
    Close,
    MacdBar,
    MaFast,
    MaSlow,
    MaDiff,
}

#[derive(Debug, Clone, Error)]
#[error("unknown series field: {0}")]
pub struct ParseFieldError(pub String);

impl SeriesField {
    pub fn name(&self) -> &'static str {
        match self {
            SeriesField::Close => "close",
            SeriesField::MacdBar => "macd_bar",
            SeriesField::MaFast => "ma_fast",
            SeriesField::MaSlow => "ma_slow",
            SeriesField::MaDiff => "ma_diff",
        }
    }
}

impl fmt::Display for SeriesField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeriesField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "close" => Ok(SeriesField::Close),
            "macd_bar" => Ok(SeriesField::MacdBar),
            "ma_fast" => Ok(SeriesField::MaFast),
            "ma_slow" => Ok(SeriesField::MaSlow),
            "ma_diff" => Ok(SeriesField::MaDiff),
            other => Err(ParseFieldError(other.to_string())),
        }
    }
}

/// Indicator-enriched series for one (symbol, period).
///
/// Rows are addressed by zero-based position, which is both time order and
/// the coordinate space used by the wave scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub symbol: String,
    pub period: KlinePeriod,
    pub records: Vec<SeriesRecord>,
}

impl Series {
    pub fn new(symbol: impl Into<String>, period: KlinePeriod, records: Vec<SeriesRecord>) -> Self {
        Self {
            symbol: symbol.into(),
            period,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy of one column, in row order.
    pub fn column(&self, field: SeriesField) -> Vec<f64> {
        self.records.iter().map(|r| r.get(field)).collect()
    }
}
