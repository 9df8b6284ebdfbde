//! Builds an indicator-enriched [`Series`] from raw bars.

use tracing::{debug, info};

use crate::config::IndicatorConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::oscillator_histogram;
use crate::indicators::trend::moving_average;
use crate::models::{Bar, KlinePeriod, Series, SeriesRecord};

/// Compute MACD histogram and both moving averages for `bars`.
///
/// `bars` must be sorted ascending by time. Fails when there are fewer bars
/// than the longest configured smoothing span.
pub fn compute_series(
    symbol: &str,
    period: KlinePeriod,
    bars: &[Bar],
    config: &IndicatorConfig,
) -> Result<Series, IndicatorError> {
    let required = config.min_bars().max(1);
    if bars.len() < required {
        return Err(IndicatorError::InsufficientData {
            required,
            actual: bars.len(),
        });
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let macd = oscillator_histogram(
        &closes,
        config.quick_span,
        config.slow_span,
        config.signal_span,
    )?;
    let ma_fast = moving_average(&closes, config.ma_fast_window)?;
    let ma_slow = moving_average(&closes, config.ma_slow_window)?;

    let records: Vec<SeriesRecord> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| SeriesRecord {
            timestamp: bar.timestamp,
            close: bar.close,
            macd_bar: macd.histogram[i],
            ma_fast: ma_fast[i],
            ma_slow: ma_slow[i],
            ma_diff: round2(ma_fast[i] - ma_slow[i]),
        })
        .collect();

    debug!(
        symbol,
        period = %period,
        last_bar = ?records.last().map(|r| r.macd_bar),
        "Computed indicator columns"
    );
    info!(symbol, period = %period, rows = records.len(), "Series computed");

    Ok(Series::new(symbol, period, records))
}

/// Round to two decimals from the exact binary value, ties to even.
///
/// `2.675` is stored just below the half and rounds to `2.67`; scaling by 100
/// first would lose that and give `2.68`.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse::<f64>().unwrap_or(value)
}
