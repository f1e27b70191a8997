//! Formula error types.

use thiserror::Error;

/// Errors that can occur while evaluating a calculator formula.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Argument was non-finite, non-positive or outside the formula's domain.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An iterative solve could not produce a finite answer.
    #[error("Calculation did not converge: {0}")]
    NoConvergence(String),
}

/// Result type for formula evaluations.
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Require a finite, strictly positive argument.
pub(crate) fn ensure_positive(name: &str, value: f64) -> FormulaResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FormulaError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

/// Require a finite argument.
pub(crate) fn ensure_finite(name: &str, value: f64) -> FormulaResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::InvalidInput(format!(
            "{} must be a finite number",
            name
        )))
    }
}
