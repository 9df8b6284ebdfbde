use serde::{Deserialize, Serialize};

/// Per-index wave label.
///
/// Discriminants match the stored codes: untagged `0`, trough `1`, peak `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i8)]
pub enum WaveTag {
    #[default]
    None = 0,
    Trough = 1,
    Peak = 2,
}

impl WaveTag {
    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(WaveTag::None),
            1 => Some(WaveTag::Trough),
            2 => Some(WaveTag::Peak),
            _ => None,
        }
    }
}

/// Inclusive index interval `[start, end]` of uniform sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices covered.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

impl From<(usize, usize)> for Run {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}
