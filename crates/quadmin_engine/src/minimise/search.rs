//! The Lipschitz sweep and bracketing loop.

use quadmin_core::traits::ScalarFunction;
use quadmin_core::types::{CalculationOutcome, Interval};

use super::{MinimisationConfig, MinimisationError};

/// Saw-tooth lower-envelope minimum search over a bounded interval.
///
/// The search first estimates a Lipschitz constant `L` from slope samples
/// across the interval, then repeatedly intersects the downward cones of
/// slope `±L` rooted at the bracket ends, shrinking the bracket toward the
/// half whose envelope candidate evaluates lower. The smallest objective
/// value observed across all iterations is reported.
///
/// The Lipschitz estimate is heuristic, not certified: under-sampling a
/// rapidly varying function can under-estimate `L`, and the search can then
/// miss the true minimum. Tighten `lipschitz_samples` to trade cost for a
/// safer bound.
///
/// # Examples
///
/// ```
/// use quadmin_core::types::Interval;
/// use quadmin_engine::minimise::{BrokenLineSearch, MinimisationConfig};
///
/// let search = BrokenLineSearch::new(MinimisationConfig::with_accuracy(1e-6)).unwrap();
/// let interval = Interval::new(-4.0, 3.0).unwrap();
///
/// let outcome = search.minimise(&|x: f64| (x - 1.0) * (x - 1.0), interval);
/// assert!(outcome.is_success());
/// assert!(outcome.value() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct BrokenLineSearch {
    config: MinimisationConfig,
}

impl BrokenLineSearch {
    /// Create a search with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `MinimisationError` if the configuration violates any
    /// precondition; the objective is never evaluated on failure.
    pub fn new(config: MinimisationConfig) -> Result<Self, MinimisationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a search with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: MinimisationConfig::default(),
        }
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MinimisationConfig {
        &self.config
    }

    /// Search for the global minimum of `function` over `interval`.
    ///
    /// Runs sequentially and always executes at least one full bracketing
    /// iteration before the termination check applies. Returns a failed
    /// outcome when the iteration budget is exhausted before convergence or
    /// when the objective degenerates to non-finite values.
    pub fn minimise<F: ScalarFunction>(
        &self,
        function: &F,
        interval: Interval,
    ) -> CalculationOutcome {
        let delta = self.config.accuracy;
        let lipschitz = self.lipschitz_estimate(function, interval, delta);

        // A flat (or anomalous) slope sweep leaves the saw-tooth
        // construction undefined; the midpoint is as good a minimiser as
        // any point of the interval.
        if !lipschitz.is_finite() || lipschitz <= 0.0 {
            let value = function.evaluate(interval.midpoint());
            tracing::debug!(lipschitz, value, "flat slope sweep, using midpoint value");
            return if value.is_finite() {
                CalculationOutcome::succeeded(value)
            } else {
                CalculationOutcome::failed()
            };
        }

        tracing::trace!(lipschitz, interval = %interval, "starting bracket refinement");

        let mut lower = interval.min();
        let mut upper = interval.max();

        let mut previous = function.evaluate(Self::intersection(function, lower, upper, lipschitz));
        let mut best = previous;
        let mut change = previous.abs();
        let mut first_iteration = true;
        let mut iterations = 0u64;

        while first_iteration || change > self.config.accuracy {
            iterations += 1;
            if iterations > self.config.max_iterations {
                tracing::debug!(iterations, best, "iteration budget exhausted");
                return CalculationOutcome::failed();
            }

            let candidate = Self::intersection(function, lower, upper, lipschitz);
            let left = Self::intersection(function, lower, candidate, lipschitz);
            let right = Self::intersection(function, candidate, upper, lipschitz);
            if function.evaluate(left) <= function.evaluate(right) {
                upper = candidate;
            } else {
                lower = candidate;
            }

            let current = function.evaluate(Self::intersection(function, lower, upper, lipschitz));
            change = (current - previous).abs();
            previous = current;
            if current < best {
                best = current;
            }
            first_iteration = false;
        }

        tracing::trace!(best, iterations, "bracket refinement converged");

        if best.is_finite() {
            CalculationOutcome::succeeded(best)
        } else {
            CalculationOutcome::failed()
        }
    }

    /// Largest slope magnitude observed across the sampled interval.
    ///
    /// One-sided finite differences with step `delta` at equally spaced
    /// points. A heuristic global bound, not a certified one.
    fn lipschitz_estimate<F: ScalarFunction>(
        &self,
        function: &F,
        interval: Interval,
        delta: f64,
    ) -> f64 {
        let samples = self.config.lipschitz_samples;
        let step = interval.width() / samples as f64;

        let mut largest = 0.0;
        for i in 1..=samples {
            let x = interval.min() + i as f64 * step;
            let slope = ((function.evaluate(x + delta) - function.evaluate(x)) / delta).abs();
            if slope > largest {
                largest = slope;
            }
        }
        largest
    }

    /// Point where the downward cones of slope `±L` rooted at the bracket
    /// ends cross; the lower envelope's minimiser candidate for the
    /// bracket.
    fn intersection<F: ScalarFunction>(function: &F, lower: f64, upper: f64, lipschitz: f64) -> f64 {
        (function.evaluate(lower) - function.evaluate(upper)) / (2.0 * lipschitz)
            + 0.5 * (lower + upper)
    }
}
