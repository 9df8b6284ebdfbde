//! Wave segmentation: sign runs and peak/trough tags over a series column.

pub mod runs;
pub mod tagger;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::WaveConfig;
use crate::models::{Run, Series, SeriesField, WaveTag};

pub use runs::{extract_runs, runs_where, SignRuns};
pub use tagger::{split_interval, tag_waves, WaveSplit, WaveTagger, DEFAULT_MIN_WIDTH};

/// Which sign runs to tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    NonNegative,
    NonPositive,
}

/// Runs and tags computed for one column of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveReport {
    pub field: SeriesField,
    pub polarity: Polarity,
    pub runs: SignRuns,
    pub tags: Vec<WaveTag>,
}

impl WaveReport {
    /// Runs the tags were computed over.
    pub fn tagged_runs(&self) -> &[Run] {
        match self.polarity {
            Polarity::NonNegative => &self.runs.non_negative,
            Polarity::NonPositive => &self.runs.non_positive,
        }
    }

    pub fn peaks(&self) -> Vec<usize> {
        self.positions(WaveTag::Peak)
    }

    pub fn troughs(&self) -> Vec<usize> {
        self.positions(WaveTag::Trough)
    }

    fn positions(&self, kind: WaveTag) -> Vec<usize> {
        self.tags
            .iter()
            .enumerate()
            .filter(|(_, tag)| **tag == kind)
            .map(|(index, _)| index)
            .collect()
    }
}

/// Tag the non-negative runs of the configured column.
pub fn tag_series(series: &Series, config: &WaveConfig) -> WaveReport {
    tag_series_polarity(series, config, Polarity::NonNegative)
}

pub fn tag_series_polarity(series: &Series, config: &WaveConfig, polarity: Polarity) -> WaveReport {
    let values = series.column(config.field);
    let runs = extract_runs(&values);
    let selected = match polarity {
        Polarity::NonNegative => &runs.non_negative,
        Polarity::NonPositive => &runs.non_positive,
    };
    let tags = tag_waves(&values, selected, config.min_width);

    let report = WaveReport {
        field: config.field,
        polarity,
        runs,
        tags,
    };

    info!(
        symbol = %series.symbol,
        period = %series.period,
        field = %config.field,
        runs = report.tagged_runs().len(),
        peaks = report.peaks().len(),
        troughs = report.troughs().len(),
        "Wave tagging complete"
    );

    report
}
