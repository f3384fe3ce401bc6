use calculator_sdk::CalculatorError;
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported operation: {operator}")]
    UnsupportedOperator { operator: String },

    #[error("Division by zero is not allowed")]
    DivisionByZero,
}

impl DomainError {
    #[must_use]
    pub fn unsupported_operator(operator: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            operator: operator.into(),
        }
    }

    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::DivisionByZero
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for CalculatorError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::UnsupportedOperator { operator } => {
                CalculatorError::unsupported_operator(operator)
            }
            DomainError::DivisionByZero => CalculatorError::division_by_zero(),
        }
    }
}

/// Operator parsing lives in the SDK; lift its failure back into the domain.
impl From<CalculatorError> for DomainError {
    fn from(sdk_error: CalculatorError) -> Self {
        match sdk_error {
            CalculatorError::UnsupportedOperator { operator } => {
                DomainError::unsupported_operator(operator)
            }
            CalculatorError::DivisionByZero => DomainError::division_by_zero(),
        }
    }
}
