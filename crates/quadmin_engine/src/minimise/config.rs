//! Minimum-search parameters.

use super::MinimisationError;

/// Smallest accepted search tolerance.
///
/// The tolerance doubles as the finite-difference step of the Lipschitz
/// sweep, so values at machine-epsilon scale would produce meaningless
/// slope estimates.
pub const MIN_ACCURACY: f64 = 1e-15;

/// Configuration for a broken-line minimum search.
///
/// # Examples
///
/// ```
/// use quadmin_engine::minimise::MinimisationConfig;
///
/// let config = MinimisationConfig::with_accuracy(1e-8);
/// assert!(config.validate().is_ok());
///
/// let too_tight = MinimisationConfig::with_accuracy(1e-16);
/// assert!(too_tight.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimisationConfig {
    /// Absolute convergence tolerance on the objective value, also reused
    /// as the finite-difference step of the Lipschitz sweep.
    pub accuracy: f64,

    /// Number of equally spaced slope samples for the Lipschitz estimate.
    /// Denser sampling tightens the bound on rapidly varying functions at
    /// proportional cost.
    pub lipschitz_samples: usize,

    /// Hard stop for the bracketing loop; exceeding it reports a failed
    /// outcome instead of iterating forever on a poor Lipschitz estimate.
    pub max_iterations: u64,
}

impl Default for MinimisationConfig {
    /// Default values:
    /// - `accuracy`: 1e-6
    /// - `lipschitz_samples`: 1000
    /// - `max_iterations`: 100_000
    fn default() -> Self {
        Self {
            accuracy: 1e-6,
            lipschitz_samples: 1000,
            max_iterations: 100_000,
        }
    }
}

impl MinimisationConfig {
    /// Configuration with the given tolerance and default knobs otherwise.
    pub fn with_accuracy(accuracy: f64) -> Self {
        Self {
            accuracy,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition: the accuracy must be finite
    /// and at least [`MIN_ACCURACY`], the sample count and the iteration
    /// limit must be positive. No objective evaluation is performed.
    pub fn validate(&self) -> Result<(), MinimisationError> {
        if !self.accuracy.is_finite() {
            return Err(MinimisationError::InvalidAccuracy {
                accuracy: self.accuracy,
            });
        }
        if self.accuracy < MIN_ACCURACY {
            return Err(MinimisationError::AccuracyBelowFloor {
                accuracy: self.accuracy,
                floor: MIN_ACCURACY,
            });
        }
        if self.lipschitz_samples == 0 {
            return Err(MinimisationError::InvalidSampleCount { samples: 0 });
        }
        if self.max_iterations == 0 {
            return Err(MinimisationError::InvalidIterationLimit { max_iterations: 0 });
        }
        Ok(())
    }
}
