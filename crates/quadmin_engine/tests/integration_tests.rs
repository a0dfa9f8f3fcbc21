//! Integration tests for the Quadmin engines.
//!
//! These tests verify end-to-end behaviour of the bounded-function façade:
//! the accuracy contracts of the concurrent integrator, the convergence of
//! the broken-line minimum search, and the fail-fast precondition surface.

use approx::assert_relative_eq;
use quadmin_engine::bounded::BoundedFunction;
use quadmin_engine::integrate::IntegrationConfig;
use quadmin_engine::minimise::MinimisationConfig;

// ============================================================================
// Definite Integral Contracts
// ============================================================================

/// A constant integrates to `c * (b - a)` for any task decomposition.
#[test]
fn test_constant_integral_across_task_counts() {
    let f = BoundedFunction::new(|_: f64| 2.5, -1.0, 3.0).unwrap();

    for task_count in [1, 2, 4, 8] {
        let config = IntegrationConfig {
            task_count,
            ..IntegrationConfig::default()
        };
        let outcome = f.integral(&config).unwrap();
        assert!(outcome.is_success());
        assert_relative_eq!(outcome.value(), 10.0, epsilon = 1e-9);
    }
}

/// Splitting a smooth integrand across tasks changes the estimate by no
/// more than a small multiple of the requested accuracy.
#[test]
fn test_task_decomposition_invariance() {
    let f = BoundedFunction::new(|x: f64| x.exp() * (3.0 * x).cos(), 0.0, 2.0).unwrap();

    let single = f
        .integral(&IntegrationConfig {
            sample_count: 2000,
            accuracy: 1e-9,
            task_count: 1,
            ..IntegrationConfig::default()
        })
        .unwrap();
    let split = f
        .integral(&IntegrationConfig {
            sample_count: 2000,
            accuracy: 1e-9,
            task_count: 4,
            ..IntegrationConfig::default()
        })
        .unwrap();

    assert!(single.is_success());
    assert!(split.is_success());
    assert!((single.value() - split.value()).abs() < 1e-6);
}

/// ∫ sin over [0, π] = 2, a classic smoke value.
#[test]
fn test_sine_integral_reference_value() {
    let f = BoundedFunction::new(|x: f64| x.sin(), 0.0, std::f64::consts::PI).unwrap();
    let outcome = f
        .integral(&IntegrationConfig {
            sample_count: 1000,
            task_count: 4,
            ..IntegrationConfig::default()
        })
        .unwrap();
    assert!(outcome.is_success());
    assert_relative_eq!(outcome.value(), 2.0, epsilon = 1e-7);
}

/// More tasks than samples: degenerate shares still produce a finite
/// estimate (exact here, since single trapezoids are exact for linear
/// integrands).
#[test]
fn test_degenerate_task_partition() {
    let f = BoundedFunction::new(|x: f64| x, 0.0, 1.0).unwrap();
    let outcome = f
        .integral(&IntegrationConfig {
            sample_count: 3,
            task_count: 7,
            ..IntegrationConfig::default()
        })
        .unwrap();
    assert!(outcome.is_success());
    assert!(outcome.value().is_finite());
    assert_relative_eq!(outcome.value(), 0.5, epsilon = 1e-9);
}

// ============================================================================
// Global Minimum Contracts
// ============================================================================

/// A convex parabola converges to its vertex value.
#[test]
fn test_minimum_of_shifted_parabola() {
    let f = BoundedFunction::new(|x: f64| (x - 1.0) * (x - 1.0), -4.0, 3.0).unwrap();
    let outcome = f.minimum(&MinimisationConfig::with_accuracy(1e-6)).unwrap();
    assert!(outcome.is_success());
    assert!(outcome.value() >= 0.0);
    assert!(outcome.value() < 1e-5, "minimum = {}", outcome.value());
}

/// The multimodal objective 5 sin(2x) + x^2 has its global minimum well
/// below the trivial midpoint value f(0) = 0.
#[test]
fn test_minimum_of_multimodal_objective() {
    let objective = |x: f64| 5.0 * (2.0 * x).sin() + x * x;
    let f = BoundedFunction::new(objective, -4.0, 3.0).unwrap();
    let outcome = f.minimum(&MinimisationConfig::with_accuracy(1e-6)).unwrap();
    assert!(outcome.is_success());
    assert!(outcome.value() < objective(0.0));
}

/// Repeated searches on the same immutable context return identical values.
#[test]
fn test_minimum_idempotence() {
    let f = BoundedFunction::new(|x: f64| 5.0 * (2.0 * x).sin() + x * x, -4.0, 3.0).unwrap();
    let config = MinimisationConfig::with_accuracy(1e-6);
    assert_eq!(f.minimum(&config).unwrap(), f.minimum(&config).unwrap());
}

// ============================================================================
// Fail-Fast Preconditions
// ============================================================================

#[test]
fn test_domain_construction_contract() {
    assert!(BoundedFunction::new(|x: f64| x, 0.0, 1.0).is_ok());
    assert!(BoundedFunction::new(|x: f64| x, 1.0, 1.0).is_err());
    assert!(BoundedFunction::new(|x: f64| x, 2.0, 1.0).is_err());
    assert!(BoundedFunction::new(|x: f64| x, 0.0, f64::NAN).is_err());
}

#[test]
fn test_accuracy_floor_is_enforced() {
    let f = BoundedFunction::new(|x: f64| x * x, -1.0, 1.0).unwrap();
    let err = f
        .minimum(&MinimisationConfig::with_accuracy(1e-20))
        .unwrap_err();
    assert!(err.is_accuracy_below_floor());
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Constant integrands are integrated exactly (up to rounding) for
        /// any bounds and task decomposition.
        #[test]
        fn test_constant_integral_matches_area(
            c in -100.0_f64..100.0,
            min in -50.0_f64..50.0,
            width in 0.1_f64..100.0,
            task_count in 1_usize..8
        ) {
            let f = BoundedFunction::new(move |_: f64| c, min, min + width).unwrap();
            let config = IntegrationConfig {
                sample_count: 100,
                task_count,
                ..IntegrationConfig::default()
            };
            let outcome = f.integral(&config).unwrap();
            prop_assert!(outcome.is_success());
            let expected = c * width;
            prop_assert!(
                (outcome.value() - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                "got {}, expected {}",
                outcome.value(),
                expected
            );
        }

        /// Shifting a parabola's vertex inside the interval never stops the
        /// search from recovering a value close to the vertex minimum.
        #[test]
        fn test_quadratic_minimum_bounded_by_vertex_neighbourhood(
            shift in -2.0_f64..2.0
        ) {
            let f = BoundedFunction::new(
                move |x: f64| (x - shift) * (x - shift),
                -4.0,
                4.0,
            )
            .unwrap();
            let outcome = f.minimum(&MinimisationConfig::with_accuracy(1e-6)).unwrap();
            prop_assert!(outcome.is_success());
            prop_assert!(outcome.value() >= 0.0);
            prop_assert!(outcome.value() < 1e-4);
        }
    }
}
