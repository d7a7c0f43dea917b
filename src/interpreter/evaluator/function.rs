/// Single-argument builtins backed by `f64` methods.
///
/// Covers trigonometry, hyperbolic functions, logarithms, rounding, `sqrt`
/// and `sign`.
pub mod builtin;
/// The `clamp`, `clamp01` and `lerp` implementations.
///
/// Restricts or interpolates a value within a range.
pub mod clamp;
/// The registry of builtin functions.
///
/// Maps each name to its arity and implementation; shared by the translator
/// for arity checks and by the evaluator for dispatch.
pub mod core;
/// The two-argument `log(value, base)`.
pub mod log;
/// Variadic `min` and `max`.
pub mod min_max;
