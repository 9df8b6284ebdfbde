//! Unit tests for the sliding-window moving average

use crate::common::assert_close;
use wavetag::indicators::{moving_average, IndicatorError};

#[test]
fn test_ma_evicts_before_averaging() {
    let averages = moving_average(&[1.0, 2.0, 3.0, 4.0], 3).unwrap();
    assert_eq!(averages, vec![1.0, 1.5, 2.5, 3.5]);
}

#[test]
fn test_ma_steady_state_uses_window_minus_one() {
    let values: Vec<f64> = (1..=12).map(f64::from).collect();
    let averages = moving_average(&values, 5).unwrap();

    assert_close(averages[0], 1.0);
    assert_close(averages[1], 1.5);
    assert_close(averages[2], 2.0);
    assert_close(averages[3], 2.5);
    // From index 4 on, each value averages the latest four inputs.
    for t in 4..values.len() {
        let expected = values[t - 3..=t].iter().sum::<f64>() / 4.0;
        assert_close(averages[t], expected);
    }
}

#[test]
fn test_ma_window_two_is_previous_value_pairs() {
    let averages = moving_average(&[3.0, 5.0, 9.0], 2).unwrap();
    assert_eq!(averages, vec![3.0, 5.0, 9.0]);
}

#[test]
fn test_ma_invalid_window() {
    for window in [0, 1] {
        assert!(matches!(
            moving_average(&[1.0, 2.0], window),
            Err(IndicatorError::InvalidPeriod { name: "window", .. })
        ));
    }
}

#[test]
fn test_ma_empty_input() {
    assert!(matches!(
        moving_average(&[], 5),
        Err(IndicatorError::InsufficientData { .. })
    ));
}
