/// Computes the logarithm of `value` in the given `base`.
///
/// A base of one, zero or a negative base yields an infinity or NaN rather
/// than an error.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::function::log::log;
///
/// assert!((log(8.0, 2.0) - 3.0).abs() < 1e-12);
/// assert!((log(100.0, 10.0) - 2.0).abs() < 1e-12);
/// assert!(log(5.0, 1.0).is_infinite());
/// ```
#[must_use]
pub fn log(value: f64, base: f64) -> f64 {
    value.ln() / base.ln()
}
