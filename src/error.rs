/// Compile-time errors.
///
/// Defines the failures raised while segmenting and translating a statement:
/// illegal characters, misplaced operators, unbalanced parentheses, wrong
/// argument counts and unparsable literals.
pub mod parse_error;
/// Evaluation-time errors.
///
/// Contains the failures raised while binding variables or running a
/// compiled expression, such as unknown or reserved variable names.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::{ParseError, ParseErrorKind};
