use log::trace;

use crate::{
    error::EvalError,
    instruction::Instruction,
    interpreter::evaluator::{utils::builtin_constant, variables::VariableSource},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Runs a postfix program and returns the single value it leaves behind.
///
/// Every call uses its own stack, so one program may be executed from many
/// threads at once. Names are looked up in this order: the reserved
/// constants `E`, `PI` and `rand`, then `variables`.
///
/// An empty program evaluates to `0`.
///
/// # Errors
/// - Whatever `variables.check_names()` reports, before anything runs.
/// - `UnknownVariable` for a name no one binds.
/// - `StackImbalance` if the program is malformed: an operator or call
///   without enough operands, a call whose argument count breaks its
///   builtin's arity, or more than one value left at the end.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use revpol::{
///     instruction::{Instruction, Operator},
///     interpreter::evaluator::core::execute,
/// };
///
/// // x * 2 + 1
/// let program = [Instruction::Variable("x".to_string()),
///                Instruction::Number(2.0),
///                Instruction::Operator(Operator::Mul),
///                Instruction::Number(1.0),
///                Instruction::Operator(Operator::Add)];
///
/// let vars = HashMap::from([("x", 4.0)]);
/// assert_eq!(execute(&program, &vars).unwrap(), 9.0);
/// assert!(execute(&program, &()).is_err());
/// ```
pub fn execute<V>(instructions: &[Instruction], variables: &V) -> EvalResult<f64>
    where V: VariableSource + ?Sized
{
    variables.check_names()?;

    if instructions.is_empty() {
        return Ok(0.0);
    }

    let mut stack: Vec<f64> = Vec::with_capacity(instructions.len());

    for instruction in instructions {
        match instruction {
            Instruction::Number(value) => stack.push(*value),
            Instruction::Variable(name) => stack.push(resolve_variable(name, variables)?),
            Instruction::Operator(op) => {
                let right = pop(&mut stack)?;
                let left = pop(&mut stack)?;
                stack.push(op.apply(left, right));
            },
            Instruction::FunctionCall { function, arg_count } => {
                if !function.arity.check(*arg_count) {
                    return Err(EvalError::StackImbalance { depth: stack.len() });
                }
                let base = stack.len()
                                .checked_sub(*arg_count)
                                .ok_or(EvalError::StackImbalance { depth: stack.len() })?;
                let value = function.call(&stack[base..]);
                stack.truncate(base);
                stack.push(value);
            },
        }
    }

    match stack.as_slice() {
        [value] => {
            trace!("evaluated {} instruction(s) to {value}", instructions.len());
            Ok(*value)
        },
        _ => Err(EvalError::StackImbalance { depth: stack.len() }),
    }
}

/// Resolves a variable reference.
///
/// Reserved constants win over caller bindings; an unbound name is an error
/// rather than NaN.
///
/// # Example
/// ```
/// use revpol::{error::EvalError, interpreter::evaluator::core::resolve_variable};
///
/// assert_eq!(resolve_variable("E", &()).unwrap(), std::f64::consts::E);
/// assert_eq!(resolve_variable("y", &()),
///            Err(EvalError::UnknownVariable { name: "y".to_string() }));
/// ```
pub fn resolve_variable<V>(name: &str, variables: &V) -> EvalResult<f64>
    where V: VariableSource + ?Sized
{
    builtin_constant(name).or_else(|| variables.resolve(name))
                          .ok_or_else(|| EvalError::UnknownVariable { name: name.to_string() })
}

fn pop(stack: &mut Vec<f64>) -> EvalResult<f64> {
    stack.pop().ok_or(EvalError::StackImbalance { depth: 0 })
}
