//! Peak/trough tagging inside sign runs.
//!
//! Each run is treated as a magnitude landscape. The largest magnitude is the
//! peak; scanning outwards from it, the first dip below both of the next two
//! values (looking away from the peak) is a trough. The run is split at the
//! troughs and the outer pieces are queued for the same treatment until they
//! are narrower than the minimum width.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::models::{Run, WaveTag};

pub const DEFAULT_MIN_WIDTH: usize = 5;

/// Outcome of evaluating one work item.
///
/// All positions are absolute indices into the scanned column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveSplit {
    pub peak: usize,
    pub left_trough: usize,
    pub right_trough: usize,
    pub left_rest: Option<Run>,
    pub right_rest: Option<Run>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveTagger {
    min_width: usize,
}

impl Default for WaveTagger {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WIDTH)
    }
}

impl WaveTagger {
    pub fn new(min_width: usize) -> Self {
        Self { min_width }
    }

    pub fn min_width(&self) -> usize {
        self.min_width
    }

    /// Tag peaks and troughs of `values` inside `runs`.
    ///
    /// The result has one entry per value. Runs starting past the end of
    /// `values` are skipped, runs ending past it are clamped.
    pub fn tag(&self, values: &[f64], runs: &[Run]) -> Vec<WaveTag> {
        let mut tags = vec![WaveTag::None; values.len()];
        let Some(last) = values.len().checked_sub(1) else {
            return tags;
        };

        for run in runs {
            if run.start > run.end || run.start > last {
                continue;
            }
            let run = Run::new(run.start, run.end.min(last));
            debug!(start = run.start, end = run.end, "Scanning run");

            let mut queue = VecDeque::from([run]);
            while let Some(item) = queue.pop_front() {
                if item.width() < self.min_width {
                    trace!(start = item.start, end = item.end, "Interval too narrow");
                    continue;
                }

                let split = split_interval(values, item);
                tags[split.peak] = WaveTag::Peak;
                tags[split.left_trough] = WaveTag::Trough;
                tags[split.right_trough] = WaveTag::Trough;

                debug!(
                    start = item.start,
                    end = item.end,
                    peak = split.peak,
                    left_trough = split.left_trough,
                    right_trough = split.right_trough,
                    "Split interval"
                );

                // NaN inside a hand-built run can stop a scan on the peak
                // itself, returning the whole item as a remainder.
                queue.extend(
                    split
                        .left_rest
                        .into_iter()
                        .chain(split.right_rest)
                        .filter(|rest| rest.width() < item.width()),
                );
            }
        }

        tags
    }
}

/// Tag `values` inside `runs` with the given minimum width.
pub fn tag_waves(values: &[f64], runs: &[Run], min_width: usize) -> Vec<WaveTag> {
    WaveTagger::new(min_width).tag(values, runs)
}

/// Locate the peak and flanking troughs of `values[item.start..=item.end]`.
///
/// # Panics
///
/// Panics if `item.start > item.end` or `item.end >= values.len()`.
/// [`WaveTagger::tag`] clamps runs before calling this.
pub fn split_interval(values: &[f64], item: Run) -> WaveSplit {
    let s = item.start;
    let e = item.end;
    let arr: Vec<f64> = values[s..=e].iter().map(|v| v.abs()).collect();

    let p = peak_offset(&arr);
    let i = left_trough_offset(&arr, p);
    let j = right_trough_offset(&arr, p);

    let left_rest = (i != 0).then(|| Run::new(s, s + i));
    // A zero right offset means the scan never ran (peak in the last two
    // slots), not a trough at the left edge.
    let right_rest = (j != 0 && s + j != e).then(|| Run::new(s + j, e));

    WaveSplit {
        peak: s + p,
        left_trough: s + i,
        right_trough: s + j,
        left_rest,
        right_rest,
    }
}

/// Offset of the largest value, first occurrence on ties. NaN is skipped.
fn peak_offset(arr: &[f64]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (offset, &value) in arr.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((offset, value)),
        }
    }
    best.map(|(offset, _)| offset).unwrap_or(0)
}

/// Walk left from `p` while the value is at least one of its two left
/// neighbours. Reaching offset 2 snaps the trough to 0.
fn left_trough_offset(arr: &[f64], p: usize) -> usize {
    let mut k = p;
    while k >= 2 {
        let climbing = arr[k] >= arr[k - 1] || arr[k] >= arr[k - 2];
        if !climbing {
            return k;
        }
        if k == 2 {
            return 0;
        }
        k -= 1;
    }
    0
}

/// Walk right from `p` while the value is at least one of its two right
/// neighbours. Reaching offset `n - 3` snaps the trough to `n - 1`; a peak
/// past `n - 3` leaves the offset at 0.
fn right_trough_offset(arr: &[f64], p: usize) -> usize {
    let n = arr.len();
    if n < 3 {
        return 0;
    }
    let last_scan = n - 3;

    let mut k = p;
    while k <= last_scan {
        let falling = arr[k] >= arr[k + 1] || arr[k] >= arr[k + 2];
        if !falling {
            return k;
        }
        if k == last_scan {
            return n - 1;
        }
        k += 1;
    }
    0
}
