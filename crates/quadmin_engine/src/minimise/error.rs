//! Minimisation-specific error types.

use thiserror::Error;

/// Errors from validating a minimum-search request.
///
/// All variants are precondition failures surfaced before any evaluation of
/// the objective; a rejected request performs zero function evaluations.
///
/// # Examples
///
/// ```
/// use quadmin_engine::minimise::MinimisationConfig;
///
/// let err = MinimisationConfig::with_accuracy(1e-16).validate().unwrap_err();
/// assert!(err.is_accuracy_below_floor());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MinimisationError {
    /// Requested tolerance is below the supported floor.
    #[error("Accuracy {accuracy} is below the minimum supported {floor}")]
    AccuracyBelowFloor {
        /// The offending accuracy
        accuracy: f64,
        /// The smallest accepted accuracy
        floor: f64,
    },

    /// Requested tolerance is NaN or infinite.
    #[error("Invalid accuracy: {accuracy} (must be finite)")]
    InvalidAccuracy {
        /// The offending accuracy
        accuracy: f64,
    },

    /// The Lipschitz sweep needs at least one sample point.
    #[error("Invalid Lipschitz sample count: {samples} (must be > 0)")]
    InvalidSampleCount {
        /// The offending sample count
        samples: usize,
    },

    /// The bracketing loop needs a positive iteration bound.
    #[error("Invalid iteration limit: {max_iterations} (must be > 0)")]
    InvalidIterationLimit {
        /// The offending limit
        max_iterations: u64,
    },
}

impl MinimisationError {
    /// Check if this is an accuracy-below-floor error.
    pub fn is_accuracy_below_floor(&self) -> bool {
        matches!(self, Self::AccuracyBelowFloor { .. })
    }

    /// Check if this is an invalid-accuracy error.
    pub fn is_invalid_accuracy(&self) -> bool {
        matches!(self, Self::InvalidAccuracy { .. })
    }

    /// Check if this is an invalid-sample-count error.
    pub fn is_invalid_sample_count(&self) -> bool {
        matches!(self, Self::InvalidSampleCount { .. })
    }

    /// Check if this is an invalid-iteration-limit error.
    pub fn is_invalid_iteration_limit(&self) -> bool {
        matches!(self, Self::InvalidIterationLimit { .. })
    }
}
