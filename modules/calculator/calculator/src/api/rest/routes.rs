//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use crate::domain::Service;

use super::dto::{CalculateRequest, CalculationResultDto, HealthDto, OperandsRequest};
use super::handlers;
use super::problem::Problem;

/// OpenAPI document for the calculator REST surface.
#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator API", description = "Four-function arithmetic over HTTP"),
    paths(
        handlers::calculate,
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::healthcheck,
    ),
    components(schemas(
        CalculateRequest,
        OperandsRequest,
        CalculationResultDto,
        HealthDto,
        Problem,
    )),
    tags(
        (name = "calculator", description = "Arithmetic operations"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Register all REST routes for calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `service` - Domain Service
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        // POST /calculator/v1/calculate - Dispatch on the operator tag
        .route("/calculator/v1/calculate", post(handlers::calculate))
        // POST /calculator/v1/{add,subtract,multiply,divide} - Fixed operator
        .route("/calculator/v1/add", post(handlers::add))
        .route("/calculator/v1/subtract", post(handlers::subtract))
        .route("/calculator/v1/multiply", post(handlers::multiply))
        .route("/calculator/v1/divide", post(handlers::divide))
        .route("/healthz", get(handlers::healthcheck))
        .route("/openapi.json", get(openapi_json))
        .layer(Extension(service))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
