//! Calculator Module
//!
//! Exposes the four arithmetic operations over REST.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Operation dispatcher
//! - `domain/clock.rs` - Monotonic timestamp source
//! - `domain/local_client.rs` - In-process `CalculatorClient` implementation
//! - `api/rest` - Axum routes, handlers, DTOs and Problem mapping
//!
//! External consumers should use the `calculator-sdk` crate for the API
//! trait and models.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub use calculator_sdk::{
    CalculationRequest, CalculationResult, CalculatorClient, CalculatorError, Operator,
};

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{CalculatorLocalClient, Service};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
