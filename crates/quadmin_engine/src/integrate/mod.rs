//! Definite-integral estimation.
//!
//! The estimate is computed by partitioning the interval into contiguous
//! equal-width sub-intervals, refining a composite trapezoidal estimate on
//! each one concurrently, and summing the converged sub-results.
//!
//! - `config`: integration parameters and their validation
//! - `engine`: partitioning, fan-out and aggregation
//! - `task`: the per-sub-interval refinement loop

mod config;
mod engine;
mod error;
mod task;

pub use config::IntegrationConfig;
pub use engine::DefiniteIntegralEngine;
pub use error::IntegrationError;
