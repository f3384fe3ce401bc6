//! Domain service for calculator
//!
//! Routes a request to the matching arithmetic operation and stamps the
//! result with a description and the instant of computation.

use std::sync::Arc;

use calculator_sdk::{CalculationRequest, CalculationResult, Operator};
use tracing::{debug, instrument};

use super::clock::{Clock, MonotonicClock, SystemClock};
use super::error::DomainError;

/// Stateless operation dispatcher.
///
/// Shared behind `Arc` by the REST layer and the local client. The only
/// state is the clock, which keeps issued timestamps non-decreasing.
#[derive(Clone)]
pub struct Service {
    clock: Arc<dyn Clock>,
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

impl Service {
    /// Create a service reading the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a service stamping results from `clock`.
    ///
    /// Readings are clamped so issued timestamps never decrease, even if
    /// `clock` steps backwards.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock: Arc::new(MonotonicClock::new(clock)),
        }
    }

    /// Compute `request` and describe it as `"{operand1} {operator} {operand2}"`.
    ///
    /// # Errors
    /// Returns `DomainError::DivisionByZero` for a divide request whose second
    /// operand is zero (either sign).
    #[instrument(skip(self), fields(operator = %request.operator))]
    pub fn dispatch(&self, request: CalculationRequest) -> Result<CalculationResult, DomainError> {
        let CalculationRequest {
            operand1,
            operand2,
            operator,
        } = request;

        let result = match operator {
            Operator::Add => operand1 + operand2,
            Operator::Subtract => operand1 - operand2,
            Operator::Multiply => operand1 * operand2,
            Operator::Divide => {
                if operand2 == 0.0 {
                    debug!(operand1, "rejecting division by zero");
                    return Err(DomainError::division_by_zero());
                }
                operand1 / operand2
            }
        };

        debug!(operand1, operand2, result, "calculation completed");

        Ok(CalculationResult {
            result,
            operation: describe(operand1, operator, operand2),
            timestamp: self.clock.now(),
        })
    }

    /// Parse an operator tag and dispatch.
    ///
    /// # Errors
    /// Returns `DomainError::UnsupportedOperator` for an unknown tag and
    /// `DomainError::DivisionByZero` as in [`Service::dispatch`].
    pub fn calculate(
        &self,
        operand1: f64,
        operand2: f64,
        operator: &str,
    ) -> Result<CalculationResult, DomainError> {
        let operator = operator.parse::<Operator>()?;
        self.dispatch(CalculationRequest::new(operand1, operand2, operator))
    }

    /// # Errors
    /// Never fails; the `Result` mirrors the other operations.
    pub fn add(&self, operand1: f64, operand2: f64) -> Result<CalculationResult, DomainError> {
        self.dispatch(CalculationRequest::new(operand1, operand2, Operator::Add))
    }

    /// # Errors
    /// Never fails; the `Result` mirrors the other operations.
    pub fn subtract(
        &self,
        operand1: f64,
        operand2: f64,
    ) -> Result<CalculationResult, DomainError> {
        self.dispatch(CalculationRequest::new(
            operand1,
            operand2,
            Operator::Subtract,
        ))
    }

    /// # Errors
    /// Never fails; the `Result` mirrors the other operations.
    pub fn multiply(
        &self,
        operand1: f64,
        operand2: f64,
    ) -> Result<CalculationResult, DomainError> {
        self.dispatch(CalculationRequest::new(
            operand1,
            operand2,
            Operator::Multiply,
        ))
    }

    /// # Errors
    /// Returns `DomainError::DivisionByZero` when `operand2` is zero.
    pub fn divide(&self, operand1: f64, operand2: f64) -> Result<CalculationResult, DomainError> {
        self.dispatch(CalculationRequest::new(operand1, operand2, Operator::Divide))
    }
}

fn describe(operand1: f64, operator: Operator, operand2: f64) -> String {
    format!("{operand1} {operator} {operand2}")
}
