//! Calculator API trait
//!
//! Contract trait for the calculator service.

use async_trait::async_trait;

use crate::errors::CalculatorError;
use crate::models::{CalculationRequest, CalculationResult, Operator};

/// Calculator API trait
///
/// Performs one of the four arithmetic operations on a pair of operands.
#[async_trait]
pub trait CalculatorClient: Send + Sync {
    /// Dispatch a typed request to the matching arithmetic operation.
    ///
    /// # Errors
    /// [`CalculatorError::DivisionByZero`] for a divide request with a zero divisor.
    async fn dispatch(
        &self,
        request: CalculationRequest,
    ) -> Result<CalculationResult, CalculatorError>;

    /// Parse `operator` and dispatch.
    ///
    /// # Errors
    /// [`CalculatorError::UnsupportedOperator`] for an unknown tag, otherwise as
    /// [`CalculatorClient::dispatch`].
    async fn calculate(
        &self,
        operand1: f64,
        operand2: f64,
        operator: &str,
    ) -> Result<CalculationResult, CalculatorError> {
        let operator = operator.parse::<Operator>()?;
        self.dispatch(CalculationRequest::new(operand1, operand2, operator))
            .await
    }
}
