/// Generates single-argument builtins that forward to an `f64` method.
///
/// Domain errors are not raised: `sqrt(-1)` and `ln(0)` yield NaN and
/// negative infinity as IEEE 754 specifies.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::function::builtin::{sin, sqrt};
///
/// assert_eq!(sin(&[0.0]), 0.0);
/// assert_eq!(sqrt(&[9.0]), 3.0);
/// assert!(sqrt(&[-1.0]).is_nan());
/// ```
macro_rules! real_builtin {
    ($($fname:ident => $real_fn:ident),* $(,)?) => {
        $(
            #[must_use]
            pub fn $fname(args: &[f64]) -> f64 {
                args[0].$real_fn()
            }
        )*
    };
}

real_builtin! {
    abs   => abs,
    acos  => acos,
    asin  => asin,
    atan  => atan,
    ceil  => ceil,
    cos   => cos,
    cosh  => cosh,
    exp   => exp,
    floor => floor,
    lg    => log10,
    ln    => ln,
    sin   => sin,
    sinh  => sinh,
    sqrt  => sqrt,
    tan   => tan,
    tanh  => tanh,
}

/// Rounds to the nearest integer, sending halfway cases to the even
/// neighbour.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::function::builtin::round;
///
/// assert_eq!(round(&[2.5]), 2.0);
/// assert_eq!(round(&[3.5]), 4.0);
/// assert_eq!(round(&[-1.2]), -1.0);
/// ```
#[must_use]
pub fn round(args: &[f64]) -> f64 {
    args[0].round_ties_even()
}

/// Returns the numeric sign of a value.
///
/// Unlike [`f64::signum`], zero maps to `0.0`. NaN stays NaN.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::function::builtin::sign;
///
/// assert_eq!(sign(&[-42.0]), -1.0);
/// assert_eq!(sign(&[0.0]), 0.0);
/// assert_eq!(sign(&[0.1]), 1.0);
/// ```
#[must_use]
pub fn sign(args: &[f64]) -> f64 {
    let x = args[0];
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x * 0.0
    }
}
