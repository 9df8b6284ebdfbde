//! Sliding-window moving average

use std::collections::VecDeque;

use crate::indicators::error::{require_non_empty, IndicatorError};

/// Moving average over a buffer that is evicted *after* appending.
///
/// Once the buffer reaches `window` elements the oldest is dropped before
/// averaging, so from that point on each output averages `window - 1`
/// values: `[1, 2, 3, 4]` with `window = 3` yields `[1.0, 1.5, 2.5, 3.5]`.
/// Stored series depend on this exact windowing.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>, IndicatorError> {
    require_non_empty(values)?;
    if window < 2 {
        return Err(IndicatorError::InvalidPeriod {
            name: "window",
            value: window,
        });
    }

    let mut buffer: VecDeque<f64> = VecDeque::with_capacity(window);
    let mut averages = Vec::with_capacity(values.len());

    for &value in values {
        buffer.push_back(value);
        if buffer.len() == window {
            buffer.pop_front();
        }
        averages.push(buffer.iter().sum::<f64>() / buffer.len() as f64);
    }

    Ok(averages)
}
