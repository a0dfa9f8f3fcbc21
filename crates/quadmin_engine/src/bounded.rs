//! The bounded-function façade.

use quadmin_core::traits::ScalarFunction;
use quadmin_core::types::{CalculationOutcome, DomainError, Interval};

use crate::integrate::{DefiniteIntegralEngine, IntegrationConfig, IntegrationError};
use crate::minimise::{BrokenLineSearch, MinimisationConfig, MinimisationError};

/// A scalar function restricted to a validated bounded interval.
///
/// The façade offers the two public operations of the library — definite
/// integral estimation and global minimum search — over the same
/// function/interval context. The two capabilities are independent; neither
/// consumes the other's results.
///
/// A `BoundedFunction` holds no cross-call mutable state: every operation
/// takes its configuration as an argument and returns a call-scoped
/// outcome, so a single instance may serve any number of calls, including
/// overlapping ones from several threads.
///
/// # Examples
///
/// ```
/// use quadmin_engine::bounded::BoundedFunction;
/// use quadmin_engine::minimise::MinimisationConfig;
///
/// let f = BoundedFunction::new(|x: f64| (x - 1.0) * (x - 1.0), -4.0, 3.0).unwrap();
///
/// let minimum = f.minimum(&MinimisationConfig::with_accuracy(1e-6)).unwrap();
/// assert!(minimum.is_success());
/// assert!(minimum.value() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedFunction<F: ScalarFunction> {
    function: F,
    interval: Interval,
}

impl<F: ScalarFunction> BoundedFunction<F> {
    /// Bind `function` to the interval `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` when `min >= max` or a bound is not finite;
    /// `function` is not evaluated.
    pub fn new(function: F, min: f64, max: f64) -> Result<Self, DomainError> {
        let interval = Interval::new(min, max)?;
        Ok(Self { function, interval })
    }

    /// The validated domain.
    #[inline]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Evaluate the underlying function at `x`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.function.evaluate(x)
    }

    /// Estimate the definite integral of the function over the domain.
    ///
    /// Constructs a fresh [`DefiniteIntegralEngine`] per call and fans the
    /// sub-interval tasks out concurrently; blocks until all complete.
    ///
    /// # Errors
    ///
    /// Returns `IntegrationError` for an invalid configuration. Numerical
    /// failures (refinement exhaustion, NaN or overflow in the integrand)
    /// are reported through the outcome's success flag instead.
    pub fn integral(
        &self,
        config: &IntegrationConfig,
    ) -> Result<CalculationOutcome, IntegrationError> {
        let engine = DefiniteIntegralEngine::new(config.clone())?;
        Ok(engine.integrate(&self.function, self.interval))
    }

    /// Search for the global minimum of the function over the domain.
    ///
    /// Sequential broken-line search; see [`BrokenLineSearch`].
    ///
    /// # Errors
    ///
    /// Returns `MinimisationError` for an invalid configuration, before any
    /// evaluation of the function.
    pub fn minimum(
        &self,
        config: &MinimisationConfig,
    ) -> Result<CalculationOutcome, MinimisationError> {
        let search = BrokenLineSearch::new(config.clone())?;
        Ok(search.minimise(&self.function, self.interval))
    }
}
