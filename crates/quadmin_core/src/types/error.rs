//! Domain error types.

use thiserror::Error;

/// Errors from binding a function to a bounded interval.
///
/// Domain errors are precondition failures: they are surfaced to the caller
/// immediately and no computation is attempted.
///
/// # Variants
///
/// - `EmptyInterval`: the lower bound is not strictly below the upper bound
/// - `NonFiniteBound`: a bound is NaN or infinite
///
/// # Examples
///
/// ```
/// use quadmin_core::types::{DomainError, Interval};
///
/// let err = Interval::new(2.0, 1.0).unwrap_err();
/// assert!(err.is_empty_interval());
/// assert!(format!("{}", err).contains("2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// The lower bound is not strictly below the upper bound.
    #[error("Empty interval: min {min} is not below max {max}")]
    EmptyInterval {
        /// The offending lower bound
        min: f64,
        /// The offending upper bound
        max: f64,
    },

    /// A bound is NaN or infinite.
    #[error("Non-finite interval bound: {value}")]
    NonFiniteBound {
        /// The offending bound value
        value: f64,
    },
}

impl DomainError {
    /// Check if this is an empty-interval error.
    pub fn is_empty_interval(&self) -> bool {
        matches!(self, Self::EmptyInterval { .. })
    }

    /// Check if this is a non-finite-bound error.
    pub fn is_non_finite_bound(&self) -> bool {
        matches!(self, Self::NonFiniteBound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interval_display() {
        let err = DomainError::EmptyInterval { min: 2.0, max: 1.0 };
        let display = format!("{}", err);
        assert!(display.contains("Empty interval"));
        assert!(display.contains("2"));
        assert!(display.contains("1"));
    }

    #[test]
    fn test_non_finite_bound_display() {
        let err = DomainError::NonFiniteBound { value: f64::NAN };
        assert!(format!("{}", err).contains("Non-finite"));
    }

    #[test]
    fn test_is_checks() {
        let err = DomainError::EmptyInterval { min: 0.0, max: 0.0 };
        assert!(err.is_empty_interval());
        assert!(!err.is_non_finite_bound());

        let err = DomainError::NonFiniteBound {
            value: f64::INFINITY,
        };
        assert!(err.is_non_finite_bound());
        assert!(!err.is_empty_interval());
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = DomainError::EmptyInterval { min: 1.0, max: 1.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = DomainError::EmptyInterval { min: 1.0, max: 0.0 };
        let _: &dyn std::error::Error = &err;
    }
}
