//! MACD wave segmentation: oscillator computation, sign-run extraction and
//! peak/trough tagging over price series.

pub mod config;
pub mod db;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
pub mod waves;

pub use error::{AppError, Result};
