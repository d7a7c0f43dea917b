use std::fmt;

use crate::interpreter::evaluator::function::{builtin, clamp, log, min_max};

/// Type alias for builtin function handlers.
///
/// A builtin receives its evaluated arguments in call order. The translator
/// guarantees the slice length satisfies the builtin's [`Arity`].
pub type BuiltinFn = fn(&[f64]) -> f64;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments, checked
///   when the statement is compiled.
/// - `Variadic` means the builtin folds over one or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use revpol::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::Exact(2).check(2));
    /// assert!(!Arity::Exact(2).check(1));
    /// assert!(Arity::Variadic.check(5));
    /// assert!(!Arity::Variadic.check(0));
    /// ```
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Variadic => n >= 1,
        }
    }
}

/// A registered builtin: its name, arity and implementation.
pub struct Builtin {
    /// Name used to call the builtin.
    pub name:  &'static str,
    /// Accepted argument count.
    pub arity: Arity,
    func:      BuiltinFn,
}

impl Builtin {
    /// Applies the builtin to its arguments.
    pub(crate) fn call(&self, args: &[f64]) -> f64 {
        debug_assert!(self.arity.check(args.len()),
                      "{} called with {} argument(s)",
                      self.name,
                      args.len());
        (self.func)(args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in lookup order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"     => { arity: Arity::Exact(1), func: builtin::abs },
    "acos"    => { arity: Arity::Exact(1), func: builtin::acos },
    "asin"    => { arity: Arity::Exact(1), func: builtin::asin },
    "atan"    => { arity: Arity::Exact(1), func: builtin::atan },
    "atan2"   => { arity: Arity::Exact(2), func: |args| args[0].atan2(args[1]) },
    "ceil"    => { arity: Arity::Exact(1), func: builtin::ceil },
    "clamp"   => { arity: Arity::Exact(3), func: |args| clamp::clamp(args[0], args[1], args[2]) },
    "clamp01" => { arity: Arity::Exact(1), func: |args| clamp::clamp(args[0], 0.0, 1.0) },
    "cos"     => { arity: Arity::Exact(1), func: builtin::cos },
    "cosh"    => { arity: Arity::Exact(1), func: builtin::cosh },
    "exp"     => { arity: Arity::Exact(1), func: builtin::exp },
    "floor"   => { arity: Arity::Exact(1), func: builtin::floor },
    "lerp"    => { arity: Arity::Exact(3), func: |args| clamp::lerp(args[0], args[1], args[2]) },
    "lg"      => { arity: Arity::Exact(1), func: builtin::lg },
    "ln"      => { arity: Arity::Exact(1), func: builtin::ln },
    "log"     => { arity: Arity::Exact(2), func: |args| log::log(args[0], args[1]) },
    "max"     => { arity: Arity::Variadic, func: min_max::max },
    "min"     => { arity: Arity::Variadic, func: min_max::min },
    "pow"     => { arity: Arity::Exact(2), func: |args| args[0].powf(args[1]) },
    "round"   => { arity: Arity::Exact(1), func: builtin::round },
    "sign"    => { arity: Arity::Exact(1), func: builtin::sign },
    "sin"     => { arity: Arity::Exact(1), func: builtin::sin },
    "sinh"    => { arity: Arity::Exact(1), func: builtin::sinh },
    "sqrt"    => { arity: Arity::Exact(1), func: builtin::sqrt },
    "tan"     => { arity: Arity::Exact(1), func: builtin::tan },
    "tanh"    => { arity: Arity::Exact(1), func: builtin::tanh },
}

/// Finds a builtin by name.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::function::core::{Arity, lookup};
///
/// assert_eq!(lookup("clamp").unwrap().arity, Arity::Exact(3));
/// assert_eq!(lookup("min").unwrap().arity, Arity::Variadic);
/// assert!(lookup("Max").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}
