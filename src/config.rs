//! Environment-driven configuration.
//!
//! Every setting has a default; values that fail to parse fall back to it
//! with a warning rather than aborting startup.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::models::{KlinePeriod, SeriesField};

/// Deployment environment name, read from `ENVIRONMENT`.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Spans and windows used by the indicator pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfig {
    pub quick_span: u32,
    pub slow_span: u32,
    pub signal_span: u32,
    pub ma_fast_window: usize,
    pub ma_slow_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            quick_span: 12,
            slow_span: 26,
            signal_span: 9,
            ma_fast_window: 5,
            ma_slow_window: 10,
        }
    }
}

impl IndicatorConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            quick_span: env_or("MACD_FAST", defaults.quick_span),
            slow_span: env_or("MACD_SLOW", defaults.slow_span),
            signal_span: env_or("MACD_SIGNAL", defaults.signal_span),
            ma_fast_window: env_or("MA_FAST", defaults.ma_fast_window),
            ma_slow_window: env_or("MA_SLOW", defaults.ma_slow_window),
        }
    }

    /// Longest smoothing span; shorter series cannot seed the pipeline.
    pub fn min_bars(&self) -> usize {
        self.quick_span.max(self.slow_span).max(self.signal_span) as usize
    }
}

/// Wave tagger settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveConfig {
    /// Narrowest interval (in bars) still considered a wave.
    pub min_width: usize,
    /// Column scanned for waves.
    pub field: SeriesField,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            min_width: 5,
            field: SeriesField::MacdBar,
        }
    }
}

impl WaveConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_width: env_or("WAVE_MIN_WIDTH", defaults.min_width),
            field: env_or("WAVE_FIELD", defaults.field),
        }
    }
}

/// Top-level settings for the `wavetag` binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub symbols: Vec<String>,
    pub periods: Vec<KlinePeriod>,
    pub raw_dir: PathBuf,
    pub data_dir: PathBuf,
    pub lookback_days: i64,
    pub indicators: IndicatorConfig,
    pub waves: WaveConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            symbols: vec!["SZ.002405".to_string()],
            periods: KlinePeriod::all().to_vec(),
            raw_dir: PathBuf::from("raw"),
            data_dir: PathBuf::from("data"),
            lookback_days: 30,
            indicators: IndicatorConfig::default(),
            waves: WaveConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let symbols = env::var("SYMBOLS")
            .ok()
            .map(|s| split_list(&s))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.symbols);

        let periods = env::var("PERIODS")
            .ok()
            .map(|s| {
                split_list(&s)
                    .iter()
                    .filter_map(|p| match p.parse::<KlinePeriod>() {
                        Ok(period) => Some(period),
                        Err(e) => {
                            warn!(value = %p, error = %e, "Ignoring unknown period");
                            None
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.periods);

        Self {
            symbols,
            periods,
            raw_dir: env::var("RAW_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.raw_dir),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            lookback_days: env_or("LOOKBACK_DAYS", defaults.lookback_days),
            indicators: IndicatorConfig::from_env(),
            waves: WaveConfig::from_env(),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                warn!(key, value = %raw, error = %e, "Invalid value, using default");
                default
            }
        },
        Err(_) => default,
    }
}
