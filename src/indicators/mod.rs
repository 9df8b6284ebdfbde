pub mod error;
pub mod pipeline;

pub mod momentum;
pub mod trend;

pub use error::IndicatorError;
pub use momentum::{oscillator_histogram, MacdSeries};
pub use pipeline::compute_series;
pub use trend::{exponential_smooth, moving_average};
