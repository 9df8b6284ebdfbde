//! Unit tests for flat-file series persistence

use crate::common::{create_bars, series_with_histogram};
use wavetag::config::IndicatorConfig;
use wavetag::db::{SeriesStore, StoreError};
use wavetag::indicators::compute_series;
use wavetag::models::KlinePeriod;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SeriesStore::new(dir.path().join("data"));

    let closes: Vec<f64> = (0..40).map(|i| 10.0 + (i as f64 / 3.0).cos()).collect();
    let series = compute_series(
        "SZ.002405",
        KlinePeriod::Min15,
        &create_bars(&closes),
        &IndicatorConfig::default(),
    )
    .unwrap();

    let path = store.save(&series).unwrap();
    assert_eq!(path, dir.path().join("data").join("SZ.002405_K_15M.csv"));

    let loaded = store.load("SZ.002405", KlinePeriod::Min15).unwrap();
    assert_eq!(loaded, series);
}

#[test]
fn test_header_and_row_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = SeriesStore::new(dir.path());
    let series = series_with_histogram(&[1.5, -2.0, 0.0]);

    let path = store.save(&series).unwrap();
    let contents = std::fs::read_to_string(path).unwrap();
    let mut lines = contents.lines();

    assert_eq!(
        lines.next(),
        Some("timestamp,close,macd_bar,ma_fast,ma_slow,ma_diff")
    );
    let bars: Vec<&str> = lines
        .map(|line| line.split(',').nth(2).unwrap())
        .collect();
    assert_eq!(bars, vec!["1.5", "-2.0", "0.0"]);
}

#[test]
fn test_save_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SeriesStore::new(dir.path());

    store.save(&series_with_histogram(&[1.0, 2.0, 3.0])).unwrap();
    store.save(&series_with_histogram(&[4.0])).unwrap();

    let loaded = store.load("TEST", KlinePeriod::Min60).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.records[0].macd_bar, 4.0);
}

#[test]
fn test_load_missing_series() {
    let dir = tempfile::tempdir().unwrap();
    let store = SeriesStore::new(dir.path());
    let result = store.load("NOPE", KlinePeriod::Min30);
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}
