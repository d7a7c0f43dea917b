use std::fmt;

use crate::interpreter::evaluator::function::core::Builtin;

/// One of the six binary arithmetic operators.
///
/// The discriminant order (`+ - * / % ^`) is the row and column order of the
/// precedence table used by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, floating-point remainder.
    Rem,
    /// `^`, exponentiation.
    Pow,
}

impl Operator {
    /// All operators in precedence-table order.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Rem, Self::Pow];

    /// Maps an operator character to its operator.
    ///
    /// # Example
    /// ```
    /// use revpol::instruction::Operator;
    ///
    /// assert_eq!(Operator::from_char('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_char('='), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Rem),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Pow => '^',
        }
    }

    /// Row/column of the operator in the precedence table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether a chain of equal-precedence operators groups to the right.
    ///
    /// Only `^` does: `2^3^2` is `2^(3^2)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Applies the operator to two operands.
    ///
    /// Division and remainder by zero follow IEEE 754 and produce infinities
    /// or NaN rather than failing.
    ///
    /// # Example
    /// ```
    /// use revpol::instruction::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(7.0, 2.0), 5.0);
    /// assert_eq!(Operator::Rem.apply(7.5, 2.0), 1.5);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Rem => left % right,
            Self::Pow => left.powf(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single step of a compiled postfix program.
///
/// Instructions are produced once by the translator and never change
/// afterwards. Each one either pushes a value onto the evaluation stack or
/// consumes values from it.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Push a literal.
    Number(f64),
    /// Push the value bound to a name.
    Variable(String),
    /// Pop two operands, push their combination.
    Operator(Operator),
    /// Pop `arg_count` operands, push the function's result.
    FunctionCall {
        /// The builtin being called.
        function:  &'static Builtin,
        /// Number of operands the call consumes.
        arg_count: usize,
    },
}

impl Instruction {
    /// Net change in evaluation stack depth caused by executing this
    /// instruction.
    ///
    /// # Example
    /// ```
    /// use revpol::{
    ///     instruction::{Instruction, Operator},
    ///     interpreter::evaluator::function::core::lookup,
    /// };
    ///
    /// let max = lookup("max").unwrap();
    ///
    /// assert_eq!(Instruction::Number(1.0).stack_effect(), 1);
    /// assert_eq!(Instruction::Operator(Operator::Add).stack_effect(), -1);
    /// assert_eq!(Instruction::FunctionCall { function:  max,
    ///                                        arg_count: 3, }.stack_effect(),
    ///            -2);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn stack_effect(&self) -> isize {
        match self {
            Self::Number(_) | Self::Variable(_) => 1,
            Self::Operator(_) => -1,
            Self::FunctionCall { arg_count, .. } => 1 - *arg_count as isize,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::FunctionCall { function, arg_count } => {
                write!(f, "{}/{arg_count}", function.name)
            },
        }
    }
}
