/// Largest of one or more arguments.
///
/// NaN arguments are skipped unless every argument is NaN.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::function::min_max::max;
///
/// assert_eq!(max(&[1.0, 5.0, 3.0]), 5.0);
/// assert_eq!(max(&[-2.0]), -2.0);
/// ```
#[must_use]
pub fn max(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::NAN, f64::max)
}

/// Smallest of one or more arguments.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::function::min_max::min;
///
/// assert_eq!(min(&[1.0, 5.0, 3.0]), 1.0);
/// ```
#[must_use]
pub fn min(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::NAN, f64::min)
}
