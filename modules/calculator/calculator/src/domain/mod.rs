//! Domain layer for calculator module
//!
//! Contains the operation dispatcher and its clock.

pub mod clock;
pub mod error;
pub mod local_client;
pub mod service;

pub use clock::{Clock, MonotonicClock, SystemClock};
pub use error::DomainError;
pub use local_client::CalculatorLocalClient;
pub use service::Service;
