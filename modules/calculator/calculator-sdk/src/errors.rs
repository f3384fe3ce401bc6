//! Public error types for the calculator module.
//!
//! These errors are safe to expose to other modules and consumers.
//! Messages are stable: callers may match them case-insensitively against
//! `division by zero` and `unsupported operation`.

use thiserror::Error;

/// Errors that can be returned by the `CalculatorClient`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The operator tag is not one of `add`, `subtract`, `multiply`, `divide`.
    #[error("Unsupported operation: {operator}")]
    UnsupportedOperator { operator: String },

    /// A divide request carried a zero second operand.
    #[error("Division by zero is not allowed")]
    DivisionByZero,
}

impl CalculatorError {
    /// Create an `UnsupportedOperator` error.
    #[must_use]
    pub fn unsupported_operator(operator: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            operator: operator.into(),
        }
    }

    /// Create a `DivisionByZero` error.
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::DivisionByZero
    }
}
