//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClient`)
//! - Model types (`Operator`, `CalculationRequest`, `CalculationResult`)
//! - Error type (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculationRequest, CalculatorClient, Operator};
//!
//! let result = client
//!     .dispatch(CalculationRequest::new(5.0, 3.0, Operator::Add))
//!     .await?;
//! assert_eq!(result.operation, "5 add 3");
//!
//! // Operator tags from untyped input go through `calculate`.
//! let result = client.calculate(10.0, 4.0, "subtract").await?;
//! assert_eq!(result.result, 6.0);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
pub mod api;
pub mod errors;
pub mod models;

pub use api::CalculatorClient;
pub use errors::CalculatorError;
pub use models::{CalculationRequest, CalculationResult, Operator};
