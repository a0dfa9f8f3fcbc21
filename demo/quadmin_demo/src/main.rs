//! Quadmin demo CLI
//!
//! Runs both engines over a handful of sample functions and logs the
//! results. Set `RUST_LOG=quadmin_engine=trace` to watch the per-task
//! diagnostics.

use anyhow::Result;
use quadmin_engine::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("quadmin_demo=info".parse()?))
        .init();

    tracing::info!("Quadmin demo starting");

    // A classic reference value: the integral of sin over [0, pi] is 2.
    let sine = BoundedFunction::new(|x: f64| x.sin(), 0.0, std::f64::consts::PI)?;
    let outcome = sine.integral(&IntegrationConfig::default())?;
    tracing::info!(
        value = outcome.value(),
        success = outcome.is_success(),
        "integral of sin(x) over [0, pi]"
    );

    // Global minimum of a multimodal objective the midpoint would miss.
    let rippled = BoundedFunction::new(|x: f64| 5.0 * (2.0 * x).sin() + x * x, -4.0, 3.0)?;
    let minimum = rippled.minimum(&MinimisationConfig::with_accuracy(1e-9))?;
    tracing::info!(
        value = minimum.value(),
        success = minimum.is_success(),
        "minimum of 5 sin(2x) + x^2 over [-4, 3]"
    );

    // A damped oscillation exercises both operations on one context.
    let damped = BoundedFunction::new(|x: f64| (-x).exp() * (4.0 * x).cos(), 0.0, 3.0)?;
    let config = IntegrationConfig {
        sample_count: 10_000,
        task_count: 4,
        ..IntegrationConfig::default()
    };
    let integral = damped.integral(&config)?;
    let low_point = damped.minimum(&MinimisationConfig::default())?;
    tracing::info!(
        integral = integral.value(),
        minimum = low_point.value(),
        "exp(-x) cos(4x) over [0, 3]"
    );

    tracing::info!("Quadmin demo done");
    Ok(())
}
