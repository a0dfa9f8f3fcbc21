//! The scalar-function capability.

/// A real-valued function of one real variable.
///
/// This is the only capability the numerical engines consume from their
/// environment. Implementations are expected to be deterministic, cheap to
/// evaluate and free of observable side effects: a single engine call may
/// evaluate the function millions of times, potentially from several worker
/// threads at once (hence the `Send + Sync` bound).
///
/// A blanket implementation covers plain closures and function pointers, so
/// callers rarely implement the trait by hand.
///
/// # Examples
///
/// ```
/// use quadmin_core::traits::ScalarFunction;
///
/// let square = |x: f64| x * x;
/// assert_eq!(square.evaluate(3.0), 9.0);
///
/// fn takes_any_function<F: ScalarFunction>(f: &F) -> f64 {
///     f.evaluate(1.0) + f.evaluate(2.0)
/// }
/// assert_eq!(takes_any_function(&square), 5.0);
/// ```
pub trait ScalarFunction: Send + Sync {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}
