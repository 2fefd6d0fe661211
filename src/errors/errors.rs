use std::{
    fmt::{self, Display},
    io,
    slice::Iter,
    vec::IntoIter,
};

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position, Span};

use super::render::render_syntax_error;

/// A single syntax error: where it starts and ends, and what went wrong.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub start: Position,
    pub end: Position,
    internal_error: ErrorImpl,
}

impl SyntaxError {
    pub fn new(error_impl: ErrorImpl, start: Position, end: Position) -> Self {
        SyntaxError {
            start,
            end,
            internal_error: error_impl,
        }
    }

    pub fn spanning(error_impl: ErrorImpl, span: Span) -> Self {
        SyntaxError::new(error_impl, span.start, span.end)
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_position(&self) -> &Position {
        &self.start
    }

    /// Renders the error with its source excerpt, optionally with ANSI colour.
    pub fn render(&self, color: bool) -> String {
        render_syntax_error(self, color)
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}

impl std::error::Error for SyntaxError {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected {found}, expected {}", join_expected(.expected))]
    UnexpectedToken {
        found: TokenKind,
        expected: Vec<TokenKind>,
    },
    #[error("unexpected {found}, expected expression")]
    ExpectedExpression { found: TokenKind },
    #[error("unexpected {found}, expected ) to close ( at {line}:{column}")]
    UnclosedGroup {
        found: TokenKind,
        line: usize,
        column: usize,
    },
    #[error("invalid number literal {literal}")]
    NumberParseError { literal: String },
    #[error("binary operator {operator} must have left and right operands")]
    MissingOperand { operator: TokenKind },
    #[error("left-hand side of assignment must be a variable")]
    InvalidAssignmentTarget,
    #[error("{keyword} statement must be inside a loop")]
    OutsideLoop { keyword: TokenKind },
    #[error("{message}")]
    Lexical { message: String },
}

/// Formats an expected-token list as `a`, `a or b`, or `a, b or c`.
fn join_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => String::from("nothing"),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init = init
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} or {}", init, last)
        }
    }
}

/// Every syntax error from one parse, in the order they were found.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SyntaxErrors(Vec<SyntaxError>);

impl SyntaxErrors {
    pub fn new(errors: Vec<SyntaxError>) -> Self {
        SyntaxErrors(errors)
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.0
    }

    pub fn iter(&self) -> Iter<'_, SyntaxError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders every error, joined by newlines.
    pub fn render(&self, color: bool) -> String {
        self.iter()
            .map(|error| error.render(color))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Display for SyntaxErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}

impl std::error::Error for SyntaxErrors {}

impl IntoIterator for SyntaxErrors {
    type Item = SyntaxError;
    type IntoIter = IntoIter<SyntaxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SyntaxErrors {
    type Item = &'a SyntaxError;
    type IntoIter = Iter<'a, SyntaxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Top level failure of a parse call.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reading source: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Syntax(#[from] SyntaxErrors),
}

impl Error {
    /// The syntax errors, if this failure came from parsing.
    pub fn syntax_errors(&self) -> Option<&SyntaxErrors> {
        match self {
            Error::Syntax(errors) => Some(errors),
            Error::Io(_) => None,
        }
    }

    pub fn render(&self, color: bool) -> String {
        match self {
            Error::Syntax(errors) => errors.render(color),
            Error::Io(_) => self.to_string(),
        }
    }
}
