use std::sync::Arc;

use axum::extract::Extension;
use axum::extract::rejection::JsonRejection;
use axum::http::Uri;
use axum::Json;
use chrono::Utc;

use crate::domain::error::DomainError;
use crate::domain::service::Service;

use super::dto::{CalculateRequest, CalculationResultDto, HealthDto, OperandsRequest};
use super::error::{domain_error_to_problem, json_rejection_to_problem};
use super::problem::{ApiResult, Problem};

fn read_body<T>(payload: Result<Json<T>, JsonRejection>, uri: &Uri) -> ApiResult<T> {
    payload
        .map(|Json(req)| req)
        .map_err(|e| json_rejection_to_problem(&e, uri.path()))
}

fn respond(
    outcome: Result<calculator_sdk::CalculationResult, DomainError>,
    uri: &Uri,
) -> ApiResult<Json<CalculationResultDto>> {
    outcome
        .map(|r| Json(r.into()))
        .map_err(|e| domain_error_to_problem(&e, uri.path()))
}

#[utoipa::path(
    post,
    path = "/calculator/v1/calculate",
    tag = "calculator",
    description = "Run `add`, `subtract`, `multiply` or `divide` on two operands",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalculationResultDto),
        (status = 400, description = "Unsupported operation or malformed body", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Division by zero", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn calculate(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResultDto>> {
    let req = read_body(payload, &uri)?;
    respond(
        svc.calculate(req.operand1, req.operand2, &req.operator),
        &uri,
    )
}

#[utoipa::path(
    post,
    path = "/calculator/v1/add",
    tag = "calculator",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Sum", body = CalculationResultDto),
        (status = 400, description = "Malformed body", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn add(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    payload: Result<Json<OperandsRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResultDto>> {
    let req = read_body(payload, &uri)?;
    respond(svc.add(req.operand1, req.operand2), &uri)
}

#[utoipa::path(
    post,
    path = "/calculator/v1/subtract",
    tag = "calculator",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Difference", body = CalculationResultDto),
        (status = 400, description = "Malformed body", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn subtract(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    payload: Result<Json<OperandsRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResultDto>> {
    let req = read_body(payload, &uri)?;
    respond(svc.subtract(req.operand1, req.operand2), &uri)
}

#[utoipa::path(
    post,
    path = "/calculator/v1/multiply",
    tag = "calculator",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Product", body = CalculationResultDto),
        (status = 400, description = "Malformed body", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn multiply(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    payload: Result<Json<OperandsRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResultDto>> {
    let req = read_body(payload, &uri)?;
    respond(svc.multiply(req.operand1, req.operand2), &uri)
}

#[utoipa::path(
    post,
    path = "/calculator/v1/divide",
    tag = "calculator",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Quotient", body = CalculationResultDto),
        (status = 400, description = "Malformed body", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Division by zero", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn divide(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    payload: Result<Json<OperandsRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResultDto>> {
    let req = read_body(payload, &uri)?;
    respond(svc.divide(req.operand1, req.operand2), &uri)
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthDto))
)]
pub async fn healthcheck() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_owned(),
        timestamp: Utc::now(),
    })
}
