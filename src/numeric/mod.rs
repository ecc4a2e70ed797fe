// ============================================================================
// Numeric Module
// Stateless arithmetic for the calculator
// ============================================================================
//
// This module provides:
// - Calculator: add/subtract/multiply/divide as associated functions
// - Operation: the four operations as a value, parseable by name or symbol
// - CalculatorError: error type for operations outside their domain
//
// Design principles:
// - Pure functions, no instance state
// - IEEE-754 f64 semantics, no extra overflow handling
// - Division by zero returns Result (no panics)

mod calculator;
mod errors;
mod operation;

pub use calculator::Calculator;
pub use errors::{CalcResult, CalculatorError};
pub use operation::{Operation, ParseOperationError};
