//! Unit tests for series computation

use crate::common::{assert_close, create_bars};
use wavetag::config::IndicatorConfig;
use wavetag::indicators::pipeline::round2;
use wavetag::indicators::{compute_series, moving_average, oscillator_histogram, IndicatorError};
use wavetag::models::{KlinePeriod, SeriesField};

fn wavy_closes(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 20.0 + 2.0 * (i as f64 / 5.0).sin())
        .collect()
}

#[test]
fn test_compute_series_insufficient_data() {
    let bars = create_bars(&wavy_closes(10));
    let result = compute_series("BTC", KlinePeriod::Min60, &bars, &IndicatorConfig::default());
    assert_eq!(
        result,
        Err(IndicatorError::InsufficientData {
            required: 26,
            actual: 10
        })
    );
}

#[test]
fn test_compute_series_empty() {
    let config = IndicatorConfig {
        quick_span: 1,
        slow_span: 1,
        signal_span: 1,
        ..IndicatorConfig::default()
    };
    let result = compute_series("BTC", KlinePeriod::Min60, &[], &config);
    assert!(matches!(
        result,
        Err(IndicatorError::InsufficientData { actual: 0, .. })
    ));
}

#[test]
fn test_compute_series_columns() {
    let closes = wavy_closes(80);
    let bars = create_bars(&closes);
    let config = IndicatorConfig::default();
    let series = compute_series("SZ.002405", KlinePeriod::Min30, &bars, &config).unwrap();

    assert_eq!(series.len(), 80);
    assert_eq!(series.symbol, "SZ.002405");
    assert_eq!(series.period, KlinePeriod::Min30);

    let macd = oscillator_histogram(&closes, 12, 26, 9).unwrap();
    let ma5 = moving_average(&closes, 5).unwrap();
    let ma10 = moving_average(&closes, 10).unwrap();

    for (i, record) in series.records.iter().enumerate() {
        assert_eq!(record.timestamp, bars[i].timestamp);
        assert_eq!(record.close, closes[i]);
        assert_close(record.macd_bar, macd.histogram[i]);
        assert_close(record.ma_fast, ma5[i]);
        assert_close(record.ma_slow, ma10[i]);
        assert_eq!(record.ma_diff, round2(ma5[i] - ma10[i]));
    }
    assert_eq!(series.column(SeriesField::Close), closes);
}

#[test]
fn test_round2() {
    assert_eq!(round2(1.234), 1.23);
    assert_eq!(round2(-0.126), -0.13);
    assert_eq!(round2(0.0), 0.0);
}

#[test]
fn test_round2_uses_exact_binary_value() {
    assert_eq!(round2(2.675), 2.67);
    assert_eq!(round2(0.125), 0.12);
    assert_eq!(round2(-0.125), -0.12);
    assert_eq!(round2(0.625), 0.62);
    assert_eq!(round2(0.375), 0.38);
}
