//! Shared fixtures for unit tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use wavetag::models::{Bar, KlinePeriod, Series, SeriesRecord};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn create_bars(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar::new(base_time() + Duration::hours(i as i64), close))
        .collect()
}

/// Series whose `macd_bar` column is `histogram`; other columns are filler.
pub fn series_with_histogram(histogram: &[f64]) -> Series {
    let records = histogram
        .iter()
        .enumerate()
        .map(|(i, &bar)| SeriesRecord {
            timestamp: base_time() + Duration::hours(i as i64),
            close: 100.0 + i as f64,
            macd_bar: bar,
            ma_fast: 100.0,
            ma_slow: 100.0,
            ma_diff: 0.0,
        })
        .collect();
    Series::new("TEST", KlinePeriod::Min60, records)
}

/// Deterministic values in `[-amplitude, amplitude]`, with exact zeros mixed in.
pub fn pseudo_random_values(count: usize, seed: u64, amplitude: f64) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let bucket = (state >> 33) % 21;
            if bucket == 0 {
                0.0
            } else {
                (bucket as f64 - 10.5) / 10.5 * amplitude
            }
        })
        .collect()
}
