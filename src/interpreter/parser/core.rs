use std::{iter::Peekable, ops::Range};

use log::{debug, trace};

use crate::{
    error::{ParseError, ParseErrorKind},
    instruction::{Instruction, Operator},
    interpreter::{
        evaluator::function::core::{Arity, Builtin, lookup},
        lexer::{Lexeme, Segmenter, Token},
        parser::{precedence::should_reduce, state::GrammarState},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    /// Marks where a parenthesised group begins.
    Open,
}

/// One open parenthesis: either a function's argument list or a plain
/// group.
#[derive(Debug)]
struct Frame {
    function:  Option<&'static Builtin>,
    arguments: usize,
    open_at:   usize,
}

/// Compiles a statement into a postfix instruction list.
///
/// This is the entry point of the translator. Tokens are pulled from the
/// segmenter one at a time, so the first problem in reading order is the one
/// reported.
///
/// # Parameters
/// - `statement`: The infix source text.
///
/// # Returns
/// The instructions in evaluation order. A blank statement yields an empty
/// list.
///
/// # Example
/// ```
/// use revpol::{
///     instruction::{Instruction, Operator},
///     interpreter::parser::core::translate,
/// };
///
/// let program = translate("1 + 2 * 3").unwrap();
///
/// assert_eq!(program,
///            vec![Instruction::Number(1.0),
///                 Instruction::Number(2.0),
///                 Instruction::Number(3.0),
///                 Instruction::Operator(Operator::Mul),
///                 Instruction::Operator(Operator::Add)]);
/// ```
pub fn translate(statement: &str) -> ParseResult<Vec<Instruction>> {
    let result = Translator::new(statement).run();
    match &result {
        Ok(program) => debug!("compiled {statement:?} into {} instruction(s)", program.len()),
        Err(e) => debug!("rejected {statement:?}: {}", e.message()),
    }
    result
}

struct Translator<'a> {
    statement: &'a str,
    tokens:    Peekable<Segmenter<'a>>,
    output:    Vec<Instruction>,
    operators: Vec<Pending>,
    frames:    Vec<Frame>,
    state:     GrammarState,
}

impl<'a> Translator<'a> {
    fn new(statement: &'a str) -> Self {
        Self { statement,
               tokens: Segmenter::new(statement).peekable(),
               output: Vec::new(),
               operators: Vec::new(),
               frames: Vec::new(),
               state: GrammarState::Start }
    }

    fn run(mut self) -> ParseResult<Vec<Instruction>> {
        while let Some(lexeme) = self.tokens.next() {
            let Lexeme { token, span } = lexeme?;
            if let Token::Segment(_) = token {
                self.check_run_end(span.end)?;
            }
            let previous = self.advance(token, span.start)?;

            match token {
                Token::Operator(op) => self.operator(op, previous.accepts_sign()),
                Token::LParen => self.open_group(None, span.start),
                Token::RParen => self.close_group(span.start)?,
                Token::Comma => self.separator(span.start)?,
                Token::Segment(text) => self.segment(text, span)?,
            }
        }
        self.finish()
    }

    /// A run ends only at a delimiter or blank space, so an illegal character
    /// directly after a segment is part of that run and is reported first.
    fn check_run_end(&mut self, end: usize) -> ParseResult<()> {
        match self.tokens.peek() {
            Some(Err(e)) if e.index() == Some(end) => Err(e.clone()),
            _ => Ok(()),
        }
    }

    /// Moves the grammar state past `token`, returning the state it left, or
    /// reports why the token cannot appear here.
    fn advance(&mut self, token: Token<'_>, at: usize) -> ParseResult<GrammarState> {
        let previous = self.state;
        self.state = previous.transition(token)
                             .map_err(|kind| ParseError::at(kind, self.statement, at))?;
        Ok(previous)
    }

    fn operator(&mut self, op: Operator, is_sign: bool) {
        if is_sign {
            self.output.push(Instruction::Number(0.0));
        }

        while let Some(Pending::Operator(top)) = self.operators.last().copied() {
            if !should_reduce(top, op) {
                break;
            }
            trace!("reduce {top} before {op}");
            self.operators.pop();
            self.output.push(Instruction::Operator(top));
        }
        trace!("shift {op}");
        self.operators.push(Pending::Operator(op));
    }

    fn open_group(&mut self, function: Option<&'static Builtin>, at: usize) {
        self.frames.push(Frame { function,
                                 arguments: 1,
                                 open_at: at });
        self.operators.push(Pending::Open);
    }

    fn close_group(&mut self, at: usize) -> ParseResult<()> {
        self.flush_group();
        if !matches!(self.operators.pop(), Some(Pending::Open)) {
            return Err(ParseError::at(ParseErrorKind::UnexpectedCloseParen, self.statement, at));
        }
        let frame = self.frames
                        .pop()
                        .ok_or_else(|| {
                            ParseError::at(ParseErrorKind::UnexpectedCloseParen, self.statement, at)
                        })?;

        if let Some(function) = frame.function {
            if let Arity::Exact(expected) = function.arity
               && expected != frame.arguments
            {
                let kind = ParseErrorKind::ArgumentCount { function: function.name.to_string(),
                                                           expected,
                                                           found: frame.arguments };
                return Err(ParseError::at(kind, self.statement, at));
            }
            self.output.push(Instruction::FunctionCall { function,
                                                         arg_count: frame.arguments });
        }
        Ok(())
    }

    fn separator(&mut self, at: usize) -> ParseResult<()> {
        match self.frames.last_mut() {
            Some(frame) if frame.function.is_some() => frame.arguments += 1,
            _ => {
                return Err(ParseError::at(ParseErrorKind::UnexpectedComma, self.statement, at));
            },
        }
        self.flush_group();
        Ok(())
    }

    fn segment(&mut self, text: &str, span: Range<usize>) -> ParseResult<()> {
        if let Some(function) = lookup(text) {
            let open = self.tokens
                           .next_if(|next| matches!(next, Ok(Lexeme { token: Token::LParen, .. })));
            let Some(Ok(open)) = open else {
                let kind = ParseErrorKind::MissingOpenParen { function: text.to_string() };
                return Err(ParseError::at(kind, self.statement, span.start));
            };
            self.state = GrammarState::AfterOpenGroup;
            self.open_group(Some(function), open.span.start);
        } else if text.starts_with(|c: char| c.is_ascii_digit()) {
            let Ok(value) = text.parse::<f64>() else {
                let kind = ParseErrorKind::InvalidNumber { literal: text.to_string() };
                return Err(ParseError::at(kind, self.statement, span.start));
            };
            self.output.push(Instruction::Number(value));
        } else {
            self.output.push(Instruction::Variable(text.to_string()));
        }
        Ok(())
    }

    /// Emits stacked operators down to, but not including, the innermost
    /// `(` marker.
    fn flush_group(&mut self) {
        while let Some(Pending::Operator(op)) = self.operators.last().copied() {
            self.operators.pop();
            self.output.push(Instruction::Operator(op));
        }
    }

    fn finish(mut self) -> ParseResult<Vec<Instruction>> {
        if self.state == GrammarState::AfterOperator {
            return Err(ParseError::whole(ParseErrorKind::TrailingOperator, self.statement));
        }
        if let Some(frame) = self.frames.last() {
            return Err(ParseError::at(ParseErrorKind::UnclosedParen,
                                      self.statement,
                                      frame.open_at));
        }
        while let Some(pending) = self.operators.pop() {
            if let Pending::Operator(op) = pending {
                self.output.push(Instruction::Operator(op));
            }
        }
        Ok(self.output)
    }
}
