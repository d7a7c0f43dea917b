/// Clamps a value between two bounds.
///
/// The bounds may be given in either order: `clamp(x, 10, 0)` behaves like
/// `clamp(x, 0, 10)`.
///
/// # Parameters
/// - `value`: The value to restrict.
/// - `lo`, `hi`: The inclusive bounds.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::function::clamp::clamp;
///
/// assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
/// assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp(5.0, 10.0, 0.0), 5.0);
/// ```
#[must_use]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    let (min, max) = if lo > hi { (hi, lo) } else { (lo, hi) };

    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation from `from` to `to` by `t`.
///
/// `t` is not clamped, so values outside `[0, 1]` extrapolate.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::function::clamp::lerp;
///
/// assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
/// assert_eq!(lerp(10.0, 20.0, 2.0), 30.0);
/// ```
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (to - from) * t + from
}
