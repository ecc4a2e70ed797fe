// ============================================================================
// My Module Library
// Greeting and stateless arithmetic helpers
// ============================================================================

//! # My Module
//!
//! A small module boilerplate: a greeting function and a stateless
//! arithmetic calculator.
//!
//! ## Features
//!
//! - **Greeting** with a default name
//! - **Calculator** operations as associated functions, no instance needed
//! - **Typed errors** for division by zero, never a panic
//! - **Optional serde** support for metadata and operation values
//! - **Optional logging** bootstrap built on `tracing-subscriber`
//!
//! ## Example
//!
//! ```rust
//! use my_module::prelude::*;
//!
//! assert_eq!(greet(None), "Hello, World!");
//! assert_eq!(greet(Some("Rust")), "Hello, Rust!");
//!
//! assert_eq!(Calculator::add(2, 3), 5.0);
//! assert_eq!(Calculator::divide(7, 2), Ok(3.5));
//! assert_eq!(
//!     Calculator::divide(1, 0),
//!     Err(CalculatorError::DivisionByZero)
//! );
//!
//! let op: Operation = "*".parse().unwrap();
//! assert_eq!(op.apply(6.0, 7.0), Ok(42.0));
//! ```

pub mod greeting;
pub mod metadata;
pub mod numeric;
pub mod utils;

pub use greeting::greet;
pub use metadata::{module_info, ModuleInfo, AUTHOR, EMAIL, EXPORTS, VERSION};
pub use numeric::{CalcResult, Calculator, CalculatorError};

// Re-exports for convenience
pub mod prelude {
    pub use crate::greeting::{greet, DEFAULT_NAME};
    pub use crate::metadata::{module_info, ModuleInfo, EXPORTS, VERSION};
    pub use crate::numeric::{
        CalcResult, Calculator, CalculatorError, Operation, ParseOperationError,
    };
}
