//! # quadmin_engine
//!
//! Concurrent definite integration and Lipschitz-bound global minimisation
//! for bounded scalar functions.
//!
//! ## Architecture Position
//!
//! Layer 2 of the workspace. Depends on `quadmin_core` (L1) for the
//! scalar-function capability and the shared value types.
//!
//! ## Modules
//!
//! - `integrate`: adaptive trapezoidal integration fanned out across
//!   concurrent sub-interval tasks ([`integrate::DefiniteIntegralEngine`])
//! - `minimise`: saw-tooth lower-envelope global minimum search
//!   ([`minimise::BrokenLineSearch`])
//! - `bounded`: the [`bounded::BoundedFunction`] façade offering both
//!   operations over one function/interval context
//!
//! ## Example
//!
//! ```rust
//! use quadmin_engine::bounded::BoundedFunction;
//! use quadmin_engine::integrate::IntegrationConfig;
//!
//! let f = BoundedFunction::new(|x: f64| x.sin(), 0.0, std::f64::consts::PI).unwrap();
//! let outcome = f.integral(&IntegrationConfig::default()).unwrap();
//! assert!(outcome.is_success());
//! assert!((outcome.value() - 2.0).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): fan integration sub-tasks out on the rayon
//!   thread pool; without it the same work runs sequentially with
//!   identical observable semantics
//! - `serde`: enable serialisation for configuration and outcome types

pub mod bounded;
pub mod integrate;
pub mod minimise;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bounded::BoundedFunction;
    pub use crate::integrate::{DefiniteIntegralEngine, IntegrationConfig, IntegrationError};
    pub use crate::minimise::{BrokenLineSearch, MinimisationConfig, MinimisationError};
    pub use quadmin_core::traits::ScalarFunction;
    pub use quadmin_core::types::{CalculationOutcome, DomainError, Interval};
}
