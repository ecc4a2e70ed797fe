// ============================================================================
// Calculator
// Stateless arithmetic over f64 operands
// ============================================================================

use super::errors::{CalculatorError, CalcResult};

/// Stateless arithmetic helper.
///
/// Every operation is an associated function; there is nothing to construct.
/// Operands accept anything convertible into `f64`, so integral and
/// fractional inputs can be mixed freely.
///
/// # Example
/// ```
/// use my_module::Calculator;
///
/// assert_eq!(Calculator::add(2, 3), 5.0);
/// assert_eq!(Calculator::multiply(2.5, 4), 10.0);
/// assert_eq!(Calculator::divide(7, 2), Ok(3.5));
/// assert!(Calculator::divide(10, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Calculator;

impl Calculator {
    /// Add two numbers.
    #[inline]
    pub fn add(a: impl Into<f64>, b: impl Into<f64>) -> f64 {
        a.into() + b.into()
    }

    /// Subtract `b` from `a`.
    #[inline]
    pub fn subtract(a: impl Into<f64>, b: impl Into<f64>) -> f64 {
        a.into() - b.into()
    }

    /// Multiply two numbers.
    #[inline]
    pub fn multiply(a: impl Into<f64>, b: impl Into<f64>) -> f64 {
        a.into() * b.into()
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `b` is zero. `-0.0` counts as zero.
    #[inline]
    pub fn divide(a: impl Into<f64>, b: impl Into<f64>) -> CalcResult<f64> {
        let (a, b) = (a.into(), b.into());
        if b == 0.0 {
            tracing::debug!(dividend = a, "Rejected division by zero");
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(a / b)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add() {
        assert_eq!(Calculator::add(2, 3), 5.0);
        assert_eq!(Calculator::add(-1, 1), 0.0);
        assert_eq!(Calculator::add(0, 0), 0.0);
        assert_eq!(Calculator::add(1.5, 2.5), 4.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Calculator::subtract(5, 3), 2.0);
        assert_eq!(Calculator::subtract(0, 5), -5.0);
        assert_eq!(Calculator::subtract(10, 10), 0.0);
        assert_eq!(Calculator::subtract(7.5, 2.5), 5.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(Calculator::multiply(3, 4), 12.0);
        assert_eq!(Calculator::multiply(-2, 3), -6.0);
        assert_eq!(Calculator::multiply(0, 100), 0.0);
        assert_eq!(Calculator::multiply(2.5, 4), 10.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(Calculator::divide(10, 2), Ok(5.0));
        assert_eq!(Calculator::divide(7, 2), Ok(3.5));
        assert_eq!(Calculator::divide(-6, 3), Ok(-2.0));
        assert_eq!(Calculator::divide(0, 5), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let result = Calculator::divide(10, 0);
        assert_eq!(result, Err(CalculatorError::DivisionByZero));
        assert_eq!(result.unwrap_err().to_string(), "Cannot divide by zero");

        // Zero dividend is still rejected
        assert_eq!(
            Calculator::divide(0, 0),
            Err(CalculatorError::DivisionByZero)
        );

        // Negative zero is zero
        assert_eq!(
            Calculator::divide(1.0, -0.0),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn test_mixed_operand_types() {
        assert_eq!(Calculator::add(1u8, 2.5f32), 3.5);
        assert_eq!(Calculator::subtract(10i16, 0.5), 9.5);
        assert_eq!(Calculator::divide(9u32, 4i32), Ok(2.25));
    }

    #[test]
    fn test_native_float_semantics() {
        assert!(Calculator::add(f64::INFINITY, f64::NEG_INFINITY).is_nan());
        assert_eq!(Calculator::multiply(f64::MAX, 2), f64::INFINITY);
        assert_eq!(Calculator::divide(1, f64::INFINITY), Ok(0.0));
    }

    proptest! {
        #[test]
        fn prop_add_matches_operator(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(Calculator::add(a, b), a + b);
        }

        #[test]
        fn prop_subtract_matches_operator(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(Calculator::subtract(a, b), a - b);
        }

        #[test]
        fn prop_multiply_matches_operator(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(Calculator::multiply(a, b), a * b);
        }

        #[test]
        fn prop_divide_matches_operator(
            a in -1e12f64..1e12,
            b in (-1e12f64..1e12).prop_filter("non-zero divisor", |b| *b != 0.0)
        ) {
            prop_assert_eq!(Calculator::divide(a, b), Ok(a / b));
        }

        #[test]
        fn prop_divide_by_zero_always_fails(a in proptest::num::f64::ANY) {
            prop_assert_eq!(Calculator::divide(a, 0.0), Err(CalculatorError::DivisionByZero));
        }

        #[test]
        fn prop_integer_operands_are_exact(a in -100_000i32..100_000, b in -100_000i32..100_000) {
            prop_assert_eq!(Calculator::add(a, b), f64::from(a + b));
            prop_assert_eq!(Calculator::subtract(a, b), f64::from(a - b));
            prop_assert_eq!(Calculator::multiply(a, b), (i64::from(a) * i64::from(b)) as f64);
        }
    }
}
