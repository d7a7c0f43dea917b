use crate::instruction::Operator;

/// What the translator does with the operator on top of the stack when
/// another operator arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The stacked operator binds tighter: emit it first.
    Reduce,
    /// The incoming operator binds tighter: keep stacking.
    Shift,
    /// Same tier; associativity of the incoming operator decides.
    Tie,
}

use Action::{Reduce as R, Shift as S, Tie as T};

/// Precedence matrix indexed `[stack_top][incoming]`, rows and columns in
/// `+ - * / % ^` order.
///
/// Tiers: `+ -` < `* / %` < `^`.
pub static PRECEDENCE: [[Action; 6]; 6] = [
    // +  -  *  /  %  ^
    [T, T, S, S, S, S], // +
    [T, T, S, S, S, S], // -
    [R, R, T, T, T, S], // *
    [R, R, T, T, T, S], // /
    [R, R, T, T, T, S], // %
    [R, R, R, R, R, T], // ^
];

/// Whether `top` must be moved to the output before `incoming` is stacked.
///
/// Equal-tier operators reduce unless the incoming one is right-associative,
/// which makes `+ - * / %` group to the left and `^` to the right.
///
/// # Example
/// ```
/// use revpol::{instruction::Operator, interpreter::parser::precedence::should_reduce};
///
/// assert!(should_reduce(Operator::Mul, Operator::Add));
/// assert!(should_reduce(Operator::Sub, Operator::Add));
/// assert!(!should_reduce(Operator::Add, Operator::Mul));
/// assert!(!should_reduce(Operator::Pow, Operator::Pow));
/// ```
#[must_use]
pub fn should_reduce(top: Operator, incoming: Operator) -> bool {
    match PRECEDENCE[top.index()][incoming.index()] {
        Action::Reduce => true,
        Action::Shift => false,
        Action::Tie => !incoming.is_right_associative(),
    }
}
