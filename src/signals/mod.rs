//! Signals derived from a computed series.

pub mod histogram;
pub mod scoring;

pub use histogram::histogram_shrinking;
pub use scoring::WaveScoring;
