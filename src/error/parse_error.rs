use std::fmt;

/// The ways a statement can fail to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character outside printable ASCII, or one of the rejected symbols.
    IllegalCharacter {
        /// The rejected character.
        found: char,
    },
    /// An operator at the start of a group or directly after another
    /// operator. Unary `+`/`-` at the start of a group is accepted.
    UnexpectedOperator {
        /// The misplaced operator.
        operator: char,
    },
    /// Two operands with nothing between them, such as `1 2` or `x(1)`.
    OperatorExpected,
    /// `()` with nothing inside.
    EmptyParentheses,
    /// A `)` after an operator, at the start of a group, or with no matching
    /// `(`.
    UnexpectedCloseParen,
    /// A `,` outside a function call or after an operator.
    UnexpectedComma,
    /// A function name that is not followed by `(`.
    MissingOpenParen {
        /// Name of the function.
        function: String,
    },
    /// A fixed-arity function called with the wrong number of arguments.
    ArgumentCount {
        /// Name of the function.
        function: String,
        /// Registered arity.
        expected: usize,
        /// Arguments found at the call site.
        found:    usize,
    },
    /// A run starting with a digit that is not a valid number.
    InvalidNumber {
        /// The rejected literal.
        literal: String,
    },
    /// The statement ends with an operator.
    TrailingOperator,
    /// A `(` was never closed.
    UnclosedParen,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter { found } => {
                write!(f, "Unexpected character {found:?}.")
            },
            Self::UnexpectedOperator { operator } => {
                write!(f, "Unexpected operator '{operator}'.")
            },
            Self::OperatorExpected => write!(f, "An operator is expected between operands."),
            Self::EmptyParentheses => write!(f, "There is nothing between '(' and ')'."),
            Self::UnexpectedCloseParen => write!(f, "Unexpected ')'."),
            Self::UnexpectedComma => write!(f, "Unexpected ','."),
            Self::MissingOpenParen { function } => {
                write!(f, "Function '{function}' must be followed by '('.")
            },
            Self::ArgumentCount { function,
                                  expected,
                                  found, } => write!(f,
                                                     "Function '{function}' requires {expected} parameter(s), but {found} were given."),
            Self::InvalidNumber { literal } => write!(f, "Unparsable number '{literal}'."),
            Self::TrailingOperator => write!(f, "Statement ends with an operator."),
            Self::UnclosedParen => write!(f, "One or more ')' required in the statement."),
        }
    }
}

/// A statement that could not be compiled.
///
/// Carries the whole statement text and, when the failure can be pinned to a
/// single character, its offset. Every character before a reported offset is
/// ASCII, so the offset counts bytes and characters alike.
///
/// # Example
/// ```
/// use revpol::error::{ParseError, ParseErrorKind};
///
/// let err = revpol::parse("1 + * 2").unwrap_err();
///
/// assert_eq!(err.kind(), &ParseErrorKind::UnexpectedOperator { operator: '*' });
/// assert_eq!(err.index(), Some(4));
/// assert_eq!(err.statement(), "1 + * 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind:      ParseErrorKind,
    statement: String,
    index:     Option<usize>,
}

impl ParseError {
    /// Creates an error pinned to the character at `index`.
    #[must_use]
    pub fn at(kind: ParseErrorKind, statement: &str, index: usize) -> Self {
        Self { kind,
               statement: statement.to_string(),
               index: Some(index) }
    }

    /// Creates an error that concerns the statement as a whole.
    #[must_use]
    pub fn whole(kind: ParseErrorKind, statement: &str) -> Self {
        Self { kind,
               statement: statement.to_string(),
               index: None }
    }

    /// What went wrong.
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The statement that failed to compile.
    #[must_use]
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// Offset of the offending character, or `None` when the failure is not
    /// tied to one position (a trailing operator, for instance).
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Human-readable description without the statement excerpt.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f,
                                  "Error at index {index}: {}\n  {}\n  {:>width$}",
                                  self.kind,
                                  self.statement,
                                  '^',
                                  width = index + 1),
            None => write!(f, "Error: {}\n  {}", self.kind, self.statement),
        }
    }
}

impl std::error::Error for ParseError {}
