//! EMA (Exponential Moving Average) indicator

use crate::indicators::error::{require_non_empty, IndicatorError};

/// Exponentially smooth `values` over `span`.
///
/// The first output equals the first input; after that
/// `out[t] = (2 * x[t] + (span - 1) * out[t - 1]) / (span + 1)`,
/// i.e. an EMA with `alpha = 2 / (span + 1)` seeded from the first value
/// rather than from an SMA.
pub fn exponential_smooth(values: &[f64], span: u32) -> Result<Vec<f64>, IndicatorError> {
    require_non_empty(values)?;
    if span == 0 {
        return Err(IndicatorError::InvalidPeriod {
            name: "span",
            value: 0,
        });
    }

    let span = span as f64;
    let mut smoothed = Vec::with_capacity(values.len());
    let mut previous = values[0];
    smoothed.push(previous);

    for &value in &values[1..] {
        previous = (2.0 * value + (span - 1.0) * previous) / (span + 1.0);
        smoothed.push(previous);
    }

    Ok(smoothed)
}
