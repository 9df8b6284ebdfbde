//! MACD (Moving Average Convergence Divergence) indicator

use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;
use crate::indicators::trend::exponential_smooth;

/// Full MACD columns, one value per input bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub diff: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Calculate the MACD oscillator over `closes`.
///
/// DIFF = EMA(quick) - EMA(slow)
/// Signal = EMA(signal_span) of DIFF
/// Histogram = (DIFF - Signal) * 2
pub fn oscillator_histogram(
    closes: &[f64],
    quick_span: u32,
    slow_span: u32,
    signal_span: u32,
) -> Result<MacdSeries, IndicatorError> {
    let quick = exponential_smooth(closes, quick_span)?;
    let slow = exponential_smooth(closes, slow_span)?;

    let diff: Vec<f64> = quick.iter().zip(&slow).map(|(q, s)| q - s).collect();
    let signal = exponential_smooth(&diff, signal_span)?;
    let histogram = diff
        .iter()
        .zip(&signal)
        .map(|(d, s)| (d - s) * 2.0)
        .collect();

    Ok(MacdSeries {
        diff,
        signal,
        histogram,
    })
}

/// Calculate MACD with default spans (12, 26, 9)
pub fn oscillator_histogram_default(closes: &[f64]) -> Result<MacdSeries, IndicatorError> {
    oscillator_histogram(closes, 12, 26, 9)
}
