//! Integration parameters.

use super::IntegrationError;

/// Configuration for a definite-integral estimation.
///
/// The engine splits the interval into `task_count` sub-intervals evaluated
/// concurrently, seeds each with its share of `sample_count` trapezoid
/// samples, and refines until successive estimates agree to `accuracy`
/// (relative), giving up after `max_refinements` halvings per task.
///
/// # Examples
///
/// ```
/// use quadmin_engine::integrate::IntegrationConfig;
///
/// let config = IntegrationConfig {
///     sample_count: 10_000,
///     accuracy: 1e-10,
///     ..IntegrationConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegrationConfig {
    /// Total trapezoid sample budget, split evenly across tasks with the
    /// remainder assigned to the last task.
    pub sample_count: usize,

    /// Relative accuracy target for the aggregate estimate. Each task
    /// converges to a tightened share of this when more than one task runs.
    pub accuracy: f64,

    /// Number of concurrently evaluated sub-intervals.
    pub task_count: usize,

    /// Hard stop for the per-task refinement loop; a task exceeding it
    /// reports a failed sub-result instead of looping forever.
    pub max_refinements: u64,
}

impl Default for IntegrationConfig {
    /// Default values:
    /// - `sample_count`: 1000
    /// - `accuracy`: 1e-9
    /// - `task_count`: available CPU count
    /// - `max_refinements`: 1000
    fn default() -> Self {
        Self {
            sample_count: 1000,
            accuracy: 1e-9,
            task_count: num_cpus::get(),
            max_refinements: 1000,
        }
    }
}

impl IntegrationConfig {
    /// Single-task configuration, useful for deterministic comparisons
    /// against the concurrent decomposition.
    pub fn sequential() -> Self {
        Self {
            task_count: 1,
            ..Self::default()
        }
    }

    /// Relaxed accuracy and a small sample budget, for cheap estimates.
    pub fn fast() -> Self {
        Self {
            sample_count: 100,
            accuracy: 1e-6,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition: task count, sample count
    /// and refinement limit must be positive, and the accuracy must be a
    /// positive finite number. No computation is attempted on failure.
    pub fn validate(&self) -> Result<(), IntegrationError> {
        if self.task_count == 0 {
            return Err(IntegrationError::InvalidTaskCount { task_count: 0 });
        }
        if self.sample_count == 0 {
            return Err(IntegrationError::InvalidSampleCount { sample_count: 0 });
        }
        if !self.accuracy.is_finite() || self.accuracy <= 0.0 {
            return Err(IntegrationError::InvalidAccuracy {
                accuracy: self.accuracy,
            });
        }
        if self.max_refinements == 0 {
            return Err(IntegrationError::InvalidRefinementLimit { max_refinements: 0 });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = IntegrationConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.task_count >= 1);
        assert_eq!(config.sample_count, 1000);
    }

    #[test]
    fn test_sequential_preset() {
        let config = IntegrationConfig::sequential();
        assert_eq!(config.task_count, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fast_preset() {
        let config = IntegrationConfig::fast();
        assert!(config.accuracy > 1e-8);
        assert!(config.sample_count <= 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_task_count_rejected() {
        let config = IntegrationConfig {
            task_count: 0,
            ..IntegrationConfig::default()
        };
        assert!(config.validate().unwrap_err().is_invalid_task_count());
    }

    #[test]
    fn test_zero_sample_count_rejected() {
        let config = IntegrationConfig {
            sample_count: 0,
            ..IntegrationConfig::default()
        };
        assert!(config.validate().unwrap_err().is_invalid_sample_count());
    }

    #[test]
    fn test_non_positive_accuracy_rejected() {
        for accuracy in [0.0, -1e-9, f64::NAN, f64::INFINITY] {
            let config = IntegrationConfig {
                accuracy,
                ..IntegrationConfig::default()
            };
            assert!(
                config.validate().unwrap_err().is_invalid_accuracy(),
                "accuracy {} should be rejected",
                accuracy
            );
        }
    }

    #[test]
    fn test_zero_refinement_limit_rejected() {
        let config = IntegrationConfig {
            max_refinements: 0,
            ..IntegrationConfig::default()
        };
        assert!(config.validate().unwrap_err().is_invalid_refinement_limit());
    }
}
