//! Local client implementation of `CalculatorClient`.

use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{CalculationRequest, CalculationResult, CalculatorClient, CalculatorError};

use super::service::Service;

/// In-process `CalculatorClient` that delegates to the module's Service.
///
/// Acts as the SDK boundary adapter: converts `DomainError` into `CalculatorError`.
#[derive(Clone)]
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorClient for CalculatorLocalClient {
    async fn dispatch(
        &self,
        request: CalculationRequest,
    ) -> Result<CalculationResult, CalculatorError> {
        self.service.dispatch(request).map_err(CalculatorError::from)
    }
}
