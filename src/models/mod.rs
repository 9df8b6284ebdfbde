//! Shared data models spanning the engine layers.

pub mod period;
pub mod series;
pub mod wave;

pub use period::{KlinePeriod, ParsePeriodError};
pub use series::{Bar, ParseFieldError, Series, SeriesField, SeriesRecord};
pub use wave::{Run, WaveTag};
