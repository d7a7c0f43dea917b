//! # revpol
//!
//! revpol is a math expression engine written in Rust.
//! It compiles an infix statement such as `clamp(x*2+1, 0, max(a,b))` into a
//! reverse-Polish instruction list once, then evaluates that list as often as
//! needed against different variable bindings.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for compilation and evaluation.
///
/// This module defines all errors that can be raised while segmenting,
/// translating or evaluating a statement. Compile errors carry the statement
/// and the offset of the offending character; evaluation errors name the
/// variable involved.
///
/// # Responsibilities
/// - Defines error kinds for every failure mode.
/// - Attaches the statement text and character offsets for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// The compiled, reusable form of a statement.
///
/// This module declares `Expression`, which owns the postfix program and
/// exposes parsing and evaluation.
pub mod expression;
/// Defines the postfix program.
///
/// This module declares the `Instruction` enum and the binary `Operator`
/// set. The translator produces instructions; the evaluator consumes them.
pub mod instruction;
/// Orchestrates compilation and evaluation.
///
/// This module ties together the lexer, the shunting-yard translator, the
/// stack machine and the builtin function registry.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Owns the static operator and function tables.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

use crate::interpreter::evaluator::variables::VariableSource;
pub use crate::{
    error::{EvalError, ParseError},
    expression::Expression,
    interpreter::evaluator::variables::{Lookup, Variables},
};

/// Compiles a statement into an [`Expression`].
///
/// # Errors
/// Returns a [`ParseError`] for the first grammar violation found.
///
/// # Examples
/// ```
/// let expr = revpol::parse("(1+2)*3").unwrap();
/// assert_eq!(expr.evaluate(&()).unwrap(), 9.0);
///
/// assert!(revpol::parse("(1+2").is_err());
/// ```
pub fn parse(statement: &str) -> Result<Expression, ParseError> {
    Expression::parse(statement)
}

/// Compiles and evaluates a statement in one go.
///
/// Useful for one-off calculations; compile once with [`parse`] when the
/// same statement is evaluated repeatedly.
///
/// # Errors
/// Returns an error if compilation or evaluation fails.
///
/// # Examples
/// ```
/// use revpol::{Variables, calculate};
///
/// let vars = Variables::new().with("x", 4.0).unwrap();
/// assert_eq!(calculate("x * 2 + 1", &vars).unwrap(), 9.0);
///
/// // `y` is not bound.
/// assert!(calculate("y + 1", &vars).is_err());
/// ```
pub fn calculate<V>(statement: &str, variables: &V) -> Result<f64, Box<dyn std::error::Error>>
    where V: VariableSource + ?Sized
{
    let expression = Expression::parse(statement)?;
    Ok(expression.evaluate(variables)?)
}
