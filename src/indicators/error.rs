use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("insufficient data: need at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("invalid {name}: {value}")]
    InvalidPeriod { name: &'static str, value: usize },
}

/// Fails with [`IndicatorError::InsufficientData`] when `values` is empty.
pub(crate) fn require_non_empty(values: &[f64]) -> Result<(), IndicatorError> {
    if values.is_empty() {
        return Err(IndicatorError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(())
}
