// ============================================================================
// Calculator Errors
// Error types for calculator operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during calculator operations.
///
/// Only division has a restricted domain; every other operation is total
/// over `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorError {
    /// Divisor was zero (positive or negative)
    DivisionByZero,
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::DivisionByZero => write!(f, "Cannot divide by zero"),
        }
    }
}

impl std::error::Error for CalculatorError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalculatorError>;
