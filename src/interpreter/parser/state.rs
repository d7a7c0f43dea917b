use crate::{
    error::ParseErrorKind,
    instruction::Operator,
    interpreter::lexer::Token,
};

/// Grammar position of the translator between two tokens.
///
/// Only validates which token may come next; it has no effect on the
/// emitted program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarState {
    /// Beginning of the statement or of a function argument: an operand or a
    /// unary sign must follow.
    Start,
    /// Directly after `(`: like `Start`, but `)` here means `()`.
    AfterOpenGroup,
    /// After a number, variable, function call or closed group.
    AfterOperand,
    /// After a binary operator.
    AfterOperator,
}

impl GrammarState {
    /// Whether a leading `+`/`-` here is a sign rather than a binary
    /// operator.
    #[must_use]
    pub const fn accepts_sign(self) -> bool {
        matches!(self, Self::Start | Self::AfterOpenGroup)
    }

    /// Whether the sub-expression so far is complete, so `)`, `,` or the end
    /// of the statement may follow.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::AfterOperand)
    }

    /// The state after `token`, or the reason `token` cannot follow.
    ///
    /// A function name is a segment like any other here; the translator
    /// consumes its `(` itself and moves straight to `AfterOpenGroup`.
    ///
    /// # Example
    /// ```
    /// use revpol::{
    ///     error::ParseErrorKind,
    ///     instruction::Operator,
    ///     interpreter::{lexer::Token, parser::state::GrammarState},
    /// };
    ///
    /// let state = GrammarState::Start.transition(Token::Operator(Operator::Sub))
    ///                                .unwrap();
    /// assert_eq!(state, GrammarState::AfterOperator);
    ///
    /// assert_eq!(GrammarState::AfterOperand.transition(Token::Segment("2")),
    ///            Err(ParseErrorKind::OperatorExpected));
    /// assert_eq!(GrammarState::AfterOpenGroup.transition(Token::RParen),
    ///            Err(ParseErrorKind::EmptyParentheses));
    /// ```
    pub fn transition(self, token: Token<'_>) -> Result<Self, ParseErrorKind> {
        match token {
            Token::Operator(op) => {
                let is_sign = self.accepts_sign() && matches!(op, Operator::Add | Operator::Sub);
                if is_sign || self == Self::AfterOperand {
                    Ok(Self::AfterOperator)
                } else {
                    Err(ParseErrorKind::UnexpectedOperator { operator: op.symbol() })
                }
            },
            Token::LParen | Token::Segment(_) if self == Self::AfterOperand => {
                Err(ParseErrorKind::OperatorExpected)
            },
            Token::LParen => Ok(Self::AfterOpenGroup),
            Token::Segment(_) => Ok(Self::AfterOperand),
            Token::RParen => match self {
                Self::AfterOperand => Ok(Self::AfterOperand),
                Self::AfterOpenGroup => Err(ParseErrorKind::EmptyParentheses),
                Self::Start | Self::AfterOperator => Err(ParseErrorKind::UnexpectedCloseParen),
            },
            Token::Comma if self.is_complete() => Ok(Self::Start),
            Token::Comma => Err(ParseErrorKind::UnexpectedComma),
        }
    }
}
