//! Histogram momentum checks

use crate::models::{Series, SeriesField};

/// Whether the last value of `field` is greater than the one before it.
///
/// On a negative histogram this means the bars are getting shorter. Returns
/// `None` with fewer than two rows.
pub fn histogram_shrinking(series: &Series, field: SeriesField) -> Option<bool> {
    let [.., previous, current] = series.records.as_slice() else {
        return None;
    };
    Some(current.get(field) > previous.get(field))
}
