//! Integration-specific error types.

use thiserror::Error;

/// Errors from validating an integration request.
///
/// All variants are precondition failures surfaced before any evaluation of
/// the integrand; numerical failures during refinement (exhausted budgets,
/// NaN, overflow) are absorbed into the returned outcome instead.
///
/// # Examples
///
/// ```
/// use quadmin_engine::integrate::{IntegrationConfig, IntegrationError};
///
/// let config = IntegrationConfig {
///     task_count: 0,
///     ..IntegrationConfig::default()
/// };
/// let err = config.validate().unwrap_err();
/// assert!(err.is_invalid_task_count());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntegrationError {
    /// Task count must be positive.
    #[error("Invalid task count: {task_count} (must be > 0)")]
    InvalidTaskCount {
        /// The offending task count
        task_count: usize,
    },

    /// Sample budget must be positive.
    #[error("Invalid sample count: {sample_count} (must be > 0)")]
    InvalidSampleCount {
        /// The offending sample count
        sample_count: usize,
    },

    /// Requested accuracy must be positive and finite.
    #[error("Invalid accuracy: {accuracy} (must be positive and finite)")]
    InvalidAccuracy {
        /// The offending accuracy
        accuracy: f64,
    },

    /// Refinement iteration bound must be positive.
    #[error("Invalid refinement limit: {max_refinements} (must be > 0)")]
    InvalidRefinementLimit {
        /// The offending limit
        max_refinements: u64,
    },
}

impl IntegrationError {
    /// Check if this is an invalid-task-count error.
    pub fn is_invalid_task_count(&self) -> bool {
        matches!(self, Self::InvalidTaskCount { .. })
    }

    /// Check if this is an invalid-sample-count error.
    pub fn is_invalid_sample_count(&self) -> bool {
        matches!(self, Self::InvalidSampleCount { .. })
    }

    /// Check if this is an invalid-accuracy error.
    pub fn is_invalid_accuracy(&self) -> bool {
        matches!(self, Self::InvalidAccuracy { .. })
    }

    /// Check if this is an invalid-refinement-limit error.
    pub fn is_invalid_refinement_limit(&self) -> bool {
        matches!(self, Self::InvalidRefinementLimit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_task_count_display() {
        let err = IntegrationError::InvalidTaskCount { task_count: 0 };
        assert!(format!("{}", err).contains("task count"));
    }

    #[test]
    fn test_invalid_sample_count_display() {
        let err = IntegrationError::InvalidSampleCount { sample_count: 0 };
        assert!(format!("{}", err).contains("sample count"));
    }

    #[test]
    fn test_invalid_accuracy_display() {
        let err = IntegrationError::InvalidAccuracy { accuracy: -1.0 };
        assert!(format!("{}", err).contains("-1"));
    }

    #[test]
    fn test_invalid_refinement_limit_display() {
        let err = IntegrationError::InvalidRefinementLimit { max_refinements: 0 };
        assert!(format!("{}", err).contains("refinement limit"));
    }

    #[test]
    fn test_is_checks() {
        assert!(IntegrationError::InvalidTaskCount { task_count: 0 }.is_invalid_task_count());
        assert!(
            IntegrationError::InvalidSampleCount { sample_count: 0 }.is_invalid_sample_count()
        );
        assert!(IntegrationError::InvalidAccuracy { accuracy: 0.0 }.is_invalid_accuracy());
        assert!(IntegrationError::InvalidRefinementLimit { max_refinements: 0 }
            .is_invalid_refinement_limit());
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = IntegrationError::InvalidTaskCount { task_count: 0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = IntegrationError::InvalidAccuracy { accuracy: f64::NAN };
        let _: &dyn std::error::Error = &err;
    }
}
