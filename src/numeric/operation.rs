// ============================================================================
// Calculator Operations
// Selects a calculator operation by value, name or symbol
// ============================================================================

use super::calculator::Calculator;
use super::errors::CalcResult;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Lowercase operation name, e.g. `"add"`.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Infix symbol, e.g. `'+'`.
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Apply the operation to two operands.
    ///
    /// # Errors
    /// Only `Divide` can fail, with `DivisionByZero`.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        tracing::trace!(operation = self.name(), a, b, "Applying operation");
        match self {
            Operation::Add => Ok(Calculator::add(a, b)),
            Operation::Subtract => Ok(Calculator::subtract(a, b)),
            Operation::Multiply => Ok(Calculator::multiply(a, b)),
            Operation::Divide => Calculator::divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperationError {
    pub input: String,
}

impl fmt::Display for ParseOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation: '{}'", self.input)
    }
}

impl std::error::Error for ParseOperationError {}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Parse an operation from its name (case-insensitive) or its symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| {
                op.name().eq_ignore_ascii_case(trimmed)
                    || trimmed.chars().eq(std::iter::once(op.symbol()))
            })
            .ok_or_else(|| ParseOperationError {
                input: s.to_string(),
            })
    }
}
