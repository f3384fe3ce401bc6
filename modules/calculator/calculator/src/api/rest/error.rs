use axum::extract::rejection::JsonRejection;
use http::StatusCode;

use super::problem::Problem;
use crate::domain::error::DomainError;

const TYPE_BASE: &str = "https://errors.calculator.local";

/// Map domain error to RFC9457 Problem
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    // Extract trace ID from current tracing span if available
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    // Both are client errors; the message goes out verbatim so callers can match on it.
    tracing::debug!(error = %e, instance, "calculation rejected");

    let (status, title, code) = match e {
        DomainError::UnsupportedOperator { .. } => (
            StatusCode::BAD_REQUEST,
            "Unsupported Operation",
            "CALCULATOR_UNSUPPORTED_OPERATOR",
        ),
        DomainError::DivisionByZero => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "Division By Zero",
            "CALCULATOR_DIVISION_BY_ZERO",
        ),
    };

    Problem::new(status, title, e.to_string())
        .with_type(format!("{TYPE_BASE}/{code}"))
        .with_code(code)
        .with_instance(instance)
        .with_trace_id(trace_id)
}

/// Map a request body that could not be read as JSON to a 400 Problem.
///
/// Always 400: 422 is reserved for `CALCULATOR_DIVISION_BY_ZERO`.
pub fn json_rejection_to_problem(rejection: &JsonRejection, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    tracing::debug!(error = %rejection, instance, "malformed request body");

    let code = "CALCULATOR_INVALID_REQUEST";
    Problem::new(StatusCode::BAD_REQUEST, "Invalid Request", rejection.body_text())
        .with_type(format!("{TYPE_BASE}/{code}"))
        .with_code(code)
        .with_instance(instance)
        .with_trace_id(trace_id)
}
