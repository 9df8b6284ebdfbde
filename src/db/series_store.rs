//! Flat-file persistence of computed series, one CSV per (symbol, period).

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{KlinePeriod, Series, SeriesRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("series file not found: {0}")]
    NotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Columns: `timestamp,close,macd_bar,ma_fast,ma_slow,ma_diff`. Row order is
/// the series index order.
pub struct SeriesStore {
    dir: PathBuf,
}

impl SeriesStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, symbol: &str, period: KlinePeriod) -> PathBuf {
        self.dir.join(period.file_name(symbol))
    }

    /// Write `series`, replacing any previous file for the same key.
    pub fn save(&self, series: &Series) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&series.symbol, series.period);

        let file = File::create(&path)?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));
        for record in &series.records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!(
            symbol = %series.symbol,
            period = %series.period,
            rows = series.len(),
            path = %path.display(),
            "Series saved"
        );
        Ok(path)
    }

    pub fn load(&self, symbol: &str, period: KlinePeriod) -> Result<Series, StoreError> {
        let path = self.path_for(symbol, period);
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }

        let file = File::open(&path)?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));
        let records = reader
            .deserialize::<SeriesRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        debug!(symbol, period = %period, rows = records.len(), "Series loaded");
        Ok(Series::new(symbol, period, records))
    }
}
