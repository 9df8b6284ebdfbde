//! Wavetag
//!
//! Computes MACD/MA columns for each configured symbol and period, stores the
//! series, tags waves on the configured column and prints a JSON report.

use chrono::{DateTime, Utc};
use dotenvy::dotenv;
use serde::Serialize;
use tracing::{info, warn};
use wavetag::config::{get_environment, AppConfig};
use wavetag::db::SeriesStore;
use wavetag::indicators::compute_series;
use wavetag::logging;
use wavetag::models::{KlinePeriod, Series, SeriesField};
use wavetag::services::market_data::lookback_range;
use wavetag::services::{CsvMarketDataSource, MarketDataSource};
use wavetag::signals::histogram_shrinking;
use wavetag::waves::{tag_series, WaveReport};

#[derive(Debug, Serialize)]
struct TaggedPoint {
    index: usize,
    timestamp: DateTime<Utc>,
    value: f64,
}

#[derive(Debug, Serialize)]
struct PeriodReport {
    symbol: String,
    period: KlinePeriod,
    field: SeriesField,
    rows: usize,
    histogram_shrinking: Option<bool>,
    peaks: Vec<TaggedPoint>,
    troughs: Vec<TaggedPoint>,
}

impl PeriodReport {
    fn new(series: &Series, report: &WaveReport) -> Self {
        let point = |index: usize| {
            let record = &series.records[index];
            TaggedPoint {
                index,
                timestamp: record.timestamp,
                value: record.get(report.field),
            }
        };

        Self {
            symbol: series.symbol.clone(),
            period: series.period,
            field: report.field,
            rows: series.len(),
            histogram_shrinking: histogram_shrinking(series, SeriesField::MacdBar),
            peaks: report.peaks().into_iter().map(point).collect(),
            troughs: report.troughs().into_iter().map(point).collect(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env();
    info!(environment = %get_environment(), "Starting wavetag");
    info!(
        symbols = ?config.symbols,
        periods = ?config.periods,
        field = %config.waves.field,
        min_width = config.waves.min_width,
        "Configuration loaded"
    );

    let source = CsvMarketDataSource::new(&config.raw_dir);
    let store = SeriesStore::new(&config.data_dir);
    let (start, end) = lookback_range(config.lookback_days);

    let mut reports = Vec::new();
    for symbol in &config.symbols {
        for &period in &config.periods {
            match process(&source, &store, &config, symbol, period, start, end) {
                Ok(report) => reports.push(report),
                Err(e) => warn!(symbol = %symbol, period = %period, error = %e, "Skipping series"),
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    info!(series = reports.len(), "Done");
    Ok(())
}

fn process(
    source: &impl MarketDataSource,
    store: &SeriesStore,
    config: &AppConfig,
    symbol: &str,
    period: KlinePeriod,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> wavetag::Result<PeriodReport> {
    let bars = source.fetch_bars(symbol, period, start, end)?;
    let series = compute_series(symbol, period, &bars, &config.indicators)?;
    store.save(&series)?;

    let report = tag_series(&series, &config.waves);
    Ok(PeriodReport::new(&series, &report))
}
