//! Per-sub-interval refinement.

use quadmin_core::traits::ScalarFunction;
use quadmin_core::types::CalculationOutcome;

/// One unit of concurrently executed integration work.
///
/// A task owns a contiguous slice of the integration domain, its share of
/// the sample budget and its tightened accuracy target. It exists only for
/// the duration of one engine call and owns its convergence state
/// exclusively; nothing is shared with sibling tasks until the final join.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IntegrationTask {
    /// Sub-interval lower bound.
    pub(crate) sub_min: f64,
    /// Sub-interval upper bound.
    pub(crate) sub_max: f64,
    /// Initial trapezoid sample count for this sub-interval.
    pub(crate) samples: usize,
    /// Convergence target for this task.
    pub(crate) accuracy: f64,
}

impl IntegrationTask {
    /// Run the refinement loop to convergence.
    ///
    /// Starts from the composite trapezoidal estimate at the assigned
    /// sample count, then repeatedly averages in a midpoint-rectangle
    /// estimate at the current segment count and doubles the segment count,
    /// until successive estimates agree to the task accuracy. Exhausting
    /// `max_refinements` halvings, or a non-finite estimate, yields a
    /// failed outcome; neither condition propagates past the task boundary.
    pub(crate) fn run<F: ScalarFunction>(
        &self,
        function: &F,
        max_refinements: u64,
    ) -> CalculationOutcome {
        // A task whose sample share rounded down to zero still integrates
        // with a single trapezoid.
        let mut segments = self.samples.max(1);
        let dx = (self.sub_max - self.sub_min) / segments as f64;

        let mut sum = 0.5 * (function.evaluate(self.sub_min) + function.evaluate(self.sub_max));
        for i in 1..segments {
            sum += function.evaluate(self.sub_min + i as f64 * dx);
        }
        let mut estimate = sum * dx;

        let mut change = estimate.abs().max(1.0);
        let mut refinements = 0u64;
        while change > (self.accuracy * estimate).abs() {
            let previous = estimate;
            estimate = 0.5 * (estimate + self.midpoint_estimate(function, segments));
            segments *= 2;
            change = (estimate - previous).abs();
            refinements += 1;
            if refinements > max_refinements {
                tracing::debug!(
                    sub_min = self.sub_min,
                    sub_max = self.sub_max,
                    refinements,
                    "refinement budget exhausted before convergence"
                );
                return CalculationOutcome::failed();
            }
        }

        tracing::trace!(
            sub_min = self.sub_min,
            sub_max = self.sub_max,
            estimate,
            refinements,
            "sub-interval converged"
        );

        if estimate.is_finite() {
            CalculationOutcome::succeeded(estimate)
        } else {
            CalculationOutcome::failed()
        }
    }

    /// Composite midpoint-rectangle estimate at `segments` segments.
    fn midpoint_estimate<F: ScalarFunction>(&self, function: &F, segments: usize) -> f64 {
        let dx = (self.sub_max - self.sub_min) / segments as f64;
        let start = self.sub_min + 0.5 * dx;
        let mut sum = 0.0;
        for i in 0..segments {
            sum += function.evaluate(start + i as f64 * dx);
        }
        sum * dx
    }
}
