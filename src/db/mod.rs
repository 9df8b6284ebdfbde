//! Persistence of computed series.

pub mod series_store;

pub use series_store::{SeriesStore, StoreError};
