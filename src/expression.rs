use std::{fmt, str::FromStr};

use crate::{
    error::ParseError,
    instruction::Instruction,
    interpreter::{
        evaluator::{
            core::{EvalResult, execute},
            utils::RESERVED_CONSTANTS,
            variables::{Lookup, VariableSource},
        },
        parser::core::{ParseResult, translate},
    },
};

/// A compiled statement, ready to be evaluated any number of times.
///
/// Holds only the postfix instruction list. Evaluation never mutates it, so a
/// single `Expression` can be shared between threads and evaluated with
/// different bindings concurrently.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use revpol::Expression;
///
/// let expr = Expression::parse("clamp(x*2+1, 0, max(a,b))").unwrap();
///
/// let vars = HashMap::from([("x", 3.0), ("a", 4.0), ("b", 5.0)]);
/// assert_eq!(expr.evaluate(&vars).unwrap(), 5.0);
///
/// let vars = HashMap::from([("x", 1.0), ("a", 4.0), ("b", 5.0)]);
/// assert_eq!(expr.evaluate(&vars).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    instructions: Vec<Instruction>,
}

impl Expression {
    /// Compiles `statement`.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first grammar violation.
    pub fn parse(statement: &str) -> ParseResult<Self> {
        Ok(Self { instructions: translate(statement)? })
    }

    /// The compiled program in evaluation order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Evaluates the expression against `variables`.
    ///
    /// # Errors
    /// - `ReservedName` if `variables` binds a reserved name.
    /// - `UnknownVariable` if a referenced variable is not bound.
    pub fn evaluate<V>(&self, variables: &V) -> EvalResult<f64>
        where V: VariableSource + ?Sized
    {
        execute(&self.instructions, variables)
    }

    /// Evaluates the expression, resolving variables through `lookup`.
    ///
    /// # Errors
    /// `UnknownVariable` if `lookup` returns `None` for a referenced name.
    ///
    /// # Example
    /// ```
    /// use revpol::Expression;
    ///
    /// let expr = Expression::parse("t * 2").unwrap();
    /// let value = expr.evaluate_with(|name| (name == "t").then_some(21.0)).unwrap();
    ///
    /// assert_eq!(value, 42.0);
    /// ```
    pub fn evaluate_with<F>(&self, lookup: F) -> EvalResult<f64>
        where F: Fn(&str) -> Option<f64>
    {
        self.evaluate(&Lookup(lookup))
    }

    /// Names of the caller variables the expression reads, in order of first
    /// use. Reserved constants are left out.
    ///
    /// # Example
    /// ```
    /// use revpol::Expression;
    ///
    /// let expr = Expression::parse("x * PI + y / x").unwrap();
    ///
    /// assert_eq!(expr.variables(), vec!["x", "y"]);
    /// ```
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for instruction in &self.instructions {
            if let Instruction::Variable(name) = instruction
               && !RESERVED_CONSTANTS.contains(&name.as_str())
               && !names.contains(&name.as_str())
            {
                names.push(name);
            }
        }
        names
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(statement: &str) -> Result<Self, Self::Err> {
        Self::parse(statement)
    }
}

/// Renders the program in reverse-Polish notation.
///
/// # Example
/// ```
/// use revpol::Expression;
///
/// let expr: Expression = "-(a + 2) ^ 2".parse().unwrap();
///
/// assert_eq!(expr.to_string(), "0 a 2 + 2 ^ -");
/// ```
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{instruction}")?;
        }
        Ok(())
    }
}
