//! Calculator error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Argument outside its domain (negative price, percent outside 0-100,
    /// zero loan term, NaN)
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Rate table failed to load or holds an out-of-range rate
    #[error("invalid rate table: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CalculationError {
    fn from(err: serde_json::Error) -> Self {
        CalculationError::Config(err.to_string())
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, CalculationError> {
    if !value.is_finite() {
        return Err(CalculationError::InvalidInput {
            field,
            reason: format!("must be a finite number (found: {})", value),
        });
    }
    if value < 0.0 {
        return Err(CalculationError::InvalidInput {
            field,
            reason: format!("must not be negative (found: {})", value),
        });
    }
    Ok(value)
}

pub(crate) fn percent(field: &'static str, value: f64) -> Result<f64, CalculationError> {
    let value = non_negative(field, value)?;
    if value > 100.0 {
        return Err(CalculationError::InvalidInput {
            field,
            reason: format!("must be between 0 and 100 (found: {})", value),
        });
    }
    Ok(value)
}
