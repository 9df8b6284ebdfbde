use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sampling period of a bar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KlinePeriod {
    Min60,
    Min30,
    Min15,
}

#[derive(Debug, Clone, Error)]
#[error("unknown kline period: {0}")]
pub struct ParsePeriodError(pub String);

impl KlinePeriod {
    pub fn all() -> [KlinePeriod; 3] {
        [KlinePeriod::Min60, KlinePeriod::Min30, KlinePeriod::Min15]
    }

    /// Period label (`KL_60`).
    pub fn label(&self) -> &'static str {
        match self {
            KlinePeriod::Min60 => "KL_60",
            KlinePeriod::Min30 => "KL_30",
            KlinePeriod::Min15 => "KL_15",
        }
    }

    /// Bar-type label used in file names (`K_60M`).
    pub fn kline_type(&self) -> &'static str {
        match self {
            KlinePeriod::Min60 => "K_60M",
            KlinePeriod::Min30 => "K_30M",
            KlinePeriod::Min15 => "K_15M",
        }
    }

    /// Flat-file name for `symbol` at this period (`SZ.002405_K_60M.csv`).
    pub fn file_name(&self, symbol: &str) -> String {
        format!("{}_{}.csv", symbol, self.kline_type())
    }
}

impl fmt::Display for KlinePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for KlinePeriod {
    type Err = ParsePeriodError;

    /// Accepts `KL_60`, `K_60M`, `60m` or `60` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let minutes = normalized
            .trim_start_matches("KL_")
            .trim_start_matches("K_")
            .trim_end_matches('M');
        match minutes {
            "60" => Ok(KlinePeriod::Min60),
            "30" => Ok(KlinePeriod::Min30),
            "15" => Ok(KlinePeriod::Min15),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}
