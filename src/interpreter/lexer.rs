use std::ops::Range;

use logos::Logos;

use crate::{
    error::{ParseError, ParseErrorKind},
    instruction::Operator,
};

/// Represents a lexical token of a statement.
///
/// Everything that is not an operator, a parenthesis, a comma or blank space
/// belongs to a segment: a maximal run of letters, digits, `.` and `_` that
/// the translator later reads as a number, a function name or a variable.
/// Any other character, including control characters and anything outside
/// ASCII, is rejected.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum Token<'a> {
    /// One of `+ - * / % ^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("%", |_| Operator::Rem)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// A number literal or an identifier, such as `3.5`, `1e3` or `max`.
    #[regex(r"[0-9A-Za-z._]+", |lex| lex.slice())]
    Segment(&'a str),
}

/// A token together with the byte range it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'a> {
    /// The token.
    pub token: Token<'a>,
    /// Location of the token in the statement.
    pub span:  Range<usize>,
}

/// Splits a statement into lexemes, reporting the first illegal character
/// as a [`ParseError`].
///
/// # Example
/// ```
/// use revpol::{
///     instruction::Operator,
///     interpreter::lexer::{Segmenter, Token},
/// };
///
/// let tokens = Segmenter::new("max(x_1, 2.5)*3").map(|l| l.unwrap().token)
///                                               .collect::<Vec<_>>();
///
/// assert_eq!(tokens,
///            vec![Token::Segment("max"),
///                 Token::LParen,
///                 Token::Segment("x_1"),
///                 Token::Comma,
///                 Token::Segment("2.5"),
///                 Token::RParen,
///                 Token::Operator(Operator::Mul),
///                 Token::Segment("3")]);
/// ```
pub struct Segmenter<'a> {
    lexer: logos::Lexer<'a, Token<'a>>,
}

impl<'a> Segmenter<'a> {
    /// Creates a segmenter positioned at the start of `statement`.
    #[must_use]
    pub fn new(statement: &'a str) -> Self {
        Self { lexer: Token::lexer(statement) }
    }

    /// The statement being segmented.
    #[must_use]
    pub fn statement(&self) -> &'a str {
        self.lexer.source()
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = Result<Lexeme<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next()?;
        let span = self.lexer.span();

        Some(match token {
                 Ok(token) => Ok(Lexeme { token, span }),
                 Err(()) => {
                     let statement = self.lexer.source();
                     let found = statement[span.start..].chars().next().unwrap_or('\u{fffd}');
                     Err(ParseError::at(ParseErrorKind::IllegalCharacter { found },
                                        statement,
                                        span.start))
                 },
             })
    }
}
