//! Sign-run extraction over an oscillator column.

use serde::{Deserialize, Serialize};

use crate::models::Run;

/// Runs for both sign predicates, each sorted ascending by start.
///
/// Zero-valued indices belong to both lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignRuns {
    pub non_negative: Vec<Run>,
    pub non_positive: Vec<Run>,
}

/// Partition `values` into maximal runs of `>= 0` and of `<= 0`.
pub fn extract_runs(values: &[f64]) -> SignRuns {
    SignRuns {
        non_negative: runs_where(values, |v| v >= 0.0),
        non_positive: runs_where(values, |v| v <= 0.0),
    }
}

/// Maximal runs of consecutive indices whose value satisfies `predicate`.
pub fn runs_where<F>(values: &[f64], predicate: F) -> Vec<Run>
where
    F: Fn(f64) -> bool,
{
    let mut runs = Vec::new();
    let mut current: Option<Run> = None;

    for (index, &value) in values.iter().enumerate() {
        if predicate(value) {
            match current.as_mut() {
                Some(run) => run.end = index,
                None => current = Some(Run::new(index, index)),
            }
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }
    runs.extend(current);

    runs
}
