//! Partitioning, fan-out and aggregation.

use quadmin_core::traits::ScalarFunction;
use quadmin_core::types::{CalculationOutcome, Interval};

use super::task::IntegrationTask;
use super::{IntegrationConfig, IntegrationError};

/// Concurrent adaptive trapezoidal integrator.
///
/// The interval is partitioned into `task_count` contiguous equal-width
/// sub-intervals, each refined independently (on the rayon pool when the
/// `parallel` feature is enabled) and joined by summation. An engine holds
/// only its validated configuration; every result is call-scoped, so one
/// engine may serve any number of calls, though the façade constructs a
/// fresh engine per call.
///
/// The aggregate outcome succeeds only when every sub-task converged and
/// the sum is finite; an individual task failure (refinement exhaustion,
/// NaN or overflow in the integrand) therefore surfaces as a failed
/// aggregate rather than being silently absorbed into the sum.
///
/// # Examples
///
/// ```
/// use quadmin_core::types::Interval;
/// use quadmin_engine::integrate::{DefiniteIntegralEngine, IntegrationConfig};
///
/// let engine = DefiniteIntegralEngine::new(IntegrationConfig::default()).unwrap();
/// let interval = Interval::new(0.0, 2.0).unwrap();
///
/// let outcome = engine.integrate(&|x: f64| x, interval);
/// assert!(outcome.is_success());
/// assert!((outcome.value() - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct DefiniteIntegralEngine {
    config: IntegrationConfig,
}

impl DefiniteIntegralEngine {
    /// Create an engine with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `IntegrationError` if the configuration violates any
    /// precondition; no computation is attempted.
    pub fn new(config: IntegrationConfig) -> Result<Self, IntegrationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an engine with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: IntegrationConfig::default(),
        }
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    /// Estimate the definite integral of `function` over `interval`.
    ///
    /// Fans one task per sub-interval out on the rayon pool and blocks
    /// until all of them complete, then aggregates.
    #[cfg(feature = "parallel")]
    pub fn integrate<F: ScalarFunction>(
        &self,
        function: &F,
        interval: Interval,
    ) -> CalculationOutcome {
        use rayon::prelude::*;

        let max_refinements = self.config.max_refinements;
        let results: Vec<CalculationOutcome> = self
            .partition(interval)
            .into_par_iter()
            .map(|task| task.run(function, max_refinements))
            .collect();

        Self::aggregate(&results)
    }

    /// Sequential fallback when the parallel feature is disabled.
    #[cfg(not(feature = "parallel"))]
    pub fn integrate<F: ScalarFunction>(
        &self,
        function: &F,
        interval: Interval,
    ) -> CalculationOutcome {
        let max_refinements = self.config.max_refinements;
        let results: Vec<CalculationOutcome> = self
            .partition(interval)
            .into_iter()
            .map(|task| task.run(function, max_refinements))
            .collect();

        Self::aggregate(&results)
    }

    /// Split the interval into contiguous equal-width tasks.
    ///
    /// Each task is seeded with `sample_count / task_count` samples except
    /// the last, which absorbs the remainder so the shares sum exactly to
    /// the configured budget. Boundary assignment is deterministic, so
    /// repeated calls partition identically.
    fn partition(&self, interval: Interval) -> Vec<IntegrationTask> {
        let task_count = self.config.task_count;
        let width = interval.width() / task_count as f64;
        let base_samples = self.config.sample_count / task_count;
        let accuracy = self.task_accuracy();

        (0..task_count)
            .map(|i| {
                let last = i + 1 == task_count;
                IntegrationTask {
                    sub_min: interval.min() + i as f64 * width,
                    sub_max: if last {
                        interval.max()
                    } else {
                        interval.min() + (i + 1) as f64 * width
                    },
                    samples: if last {
                        self.config.sample_count - (task_count - 1) * base_samples
                    } else {
                        base_samples
                    },
                    accuracy,
                }
            })
            .collect()
    }

    /// Per-task accuracy target.
    ///
    /// Summing independently converged sub-results compounds their errors,
    /// so for more than one task the requested accuracy is tightened by
    /// `0.1 * 10^-floor(log10(task_count))`. Empirical compensation, not a
    /// certified bound.
    fn task_accuracy(&self) -> f64 {
        let task_count = self.config.task_count;
        if task_count > 1 {
            let scale = (task_count as f64).log10().floor() as i32;
            self.config.accuracy * 0.1 * 0.1_f64.powi(scale)
        } else {
            self.config.accuracy
        }
    }

    /// Sum the sub-results into the aggregate outcome.
    fn aggregate(results: &[CalculationOutcome]) -> CalculationOutcome {
        let all_converged = results.iter().all(CalculationOutcome::is_success);
        let total: f64 = results.iter().map(CalculationOutcome::value).sum();

        if all_converged && total.is_finite() {
            CalculationOutcome::succeeded(total)
        } else {
            tracing::debug!(
                failed_tasks = results.iter().filter(|r| !r.is_success()).count(),
                total,
                "aggregate integral failed"
            );
            CalculationOutcome::failed()
        }
    }
}
