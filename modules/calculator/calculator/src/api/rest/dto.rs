//! REST DTOs for calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use calculator_sdk::CalculationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to run any of the four operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateRequest {
    /// First operand
    pub operand1: f64,
    /// Second operand
    pub operand2: f64,
    /// One of `add`, `subtract`, `multiply`, `divide`.
    ///
    /// Kept as a string so unknown tags reach the service and are reported as
    /// an unsupported operation.
    #[schema(example = "add")]
    pub operator: String,
}

/// Operands for the per-operation endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct OperandsRequest {
    pub operand1: f64,
    pub operand2: f64,
}

/// Result of a calculation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationResultDto {
    pub result: f64,
    /// Human-readable description, e.g. `5 add 3`.
    pub operation: String,
    /// ISO-8601 UTC instant the result was computed.
    pub timestamp: DateTime<Utc>,
}

impl From<CalculationResult> for CalculationResultDto {
    fn from(r: CalculationResult) -> Self {
        Self {
            result: r.result,
            operation: r.operation,
            timestamp: r.timestamp,
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
