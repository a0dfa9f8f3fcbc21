//! # quadmin_core: Foundation Types for the Quadmin Numerical Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! quadmin_core serves as the bottom layer of the workspace, providing:
//! - The scalar-function capability trait (`traits::ScalarFunction`)
//! - The validated bounded interval (`types::Interval`)
//! - The calculation outcome value type (`types::CalculationOutcome`)
//! - Domain error types (`types::DomainError`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other quadmin_* crates, with minimal
//! external dependencies:
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use quadmin_core::traits::ScalarFunction;
//! use quadmin_core::types::{CalculationOutcome, Interval};
//!
//! // Any Send + Sync closure is a scalar function
//! let square = |x: f64| x * x;
//! assert_eq!(square.evaluate(3.0), 9.0);
//!
//! // Intervals are validated at construction
//! let interval = Interval::new(-4.0, 3.0).unwrap();
//! assert_eq!(interval.width(), 7.0);
//! assert!(Interval::new(3.0, 3.0).is_err());
//!
//! // Outcomes are the result contract of every engine operation
//! let outcome = CalculationOutcome::succeeded(2.0);
//! assert!(outcome.is_success());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Interval`, `CalculationOutcome` and
//!   `DomainError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
