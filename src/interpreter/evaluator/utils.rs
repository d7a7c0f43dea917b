use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, function::core::BUILTIN_FUNCTIONS},
};

/// Names that always resolve to builtin values and can never be bound by a
/// caller.
pub const RESERVED_CONSTANTS: &[&str] = &["E", "PI", "rand"];

/// Resolves one of the reserved constant names.
///
/// `E` and `PI` are the usual constants. `rand` is a fresh pseudo-random
/// value in `[0, 1)` on every call, drawn from a thread-local generator.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::utils::builtin_constant;
///
/// assert_eq!(builtin_constant("PI"), Some(std::f64::consts::PI));
/// assert!((0.0..1.0).contains(&builtin_constant("rand").unwrap()));
/// assert_eq!(builtin_constant("pi"), None);
/// ```
#[must_use]
pub fn builtin_constant(name: &str) -> Option<f64> {
    match name {
        "E" => Some(std::f64::consts::E),
        "PI" => Some(std::f64::consts::PI),
        "rand" => Some(rand::random::<f64>()),
        _ => None,
    }
}

/// Checks whether an identifier is reserved by the engine.
///
/// This covers the builtin constants and every builtin function name.
///
/// # Returns
/// `true` if the name is reserved, otherwise `false`.
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("sin"));
/// assert!(is_reserved_identifier("rand"));
/// assert!(!is_reserved_identifier("speed"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name) || RESERVED_CONSTANTS.contains(&name)
}

/// Rejects a caller binding whose name is reserved.
///
/// # Example
/// ```
/// use revpol::{error::EvalError, interpreter::evaluator::utils::check_variable_name};
///
/// assert!(check_variable_name("x").is_ok());
/// assert_eq!(check_variable_name("PI"),
///            Err(EvalError::ReservedName { name: "PI".to_string() }));
/// ```
pub fn check_variable_name(name: &str) -> EvalResult<()> {
    if is_reserved_identifier(name) {
        return Err(EvalError::ReservedName { name: name.to_string() });
    }
    Ok(())
}
