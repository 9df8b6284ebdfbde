//! Interface for wave-based scoring signals consumed downstream.

use crate::models::{Series, SeriesField};

/// Wave signals a scoring strategy reads from a tagged series.
///
/// Implementations live with the strategy; this crate only produces the
/// series and tags they work from.
pub trait WaveScoring {
    /// `true` when `field` diverges from price at the latest wave.
    fn divergence(&self, series: &Series, field: SeriesField) -> bool;

    /// Ordinal of the current wave within its run, at least 1.
    fn wave_count(&self, series: &Series, field: SeriesField) -> usize;

    /// Second or later wave of the current run.
    fn is_multi_wave(&self, series: &Series, field: SeriesField) -> bool {
        self.wave_count(series, field) >= 2
    }
}
