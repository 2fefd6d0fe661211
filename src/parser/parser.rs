//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! The parser pulls tokens one at a time from a `TokenSource` and keeps
//! exactly one token of lookahead.
//!
//! Syntax errors never stop a parse. Errors that leave the token stream in
//! a usable state are recorded and parsing carries on; the rest are
//! recorded and then unwound as `Err(Unwind)` to the nearest statement
//! boundary, where the parser resynchronises.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by the token that starts the statement
//! - Binding powers of the binary operators

use std::{cell::RefCell, collections::HashMap, io::Read, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl, SyntaxError, SyntaxErrors},
    },
    lexer::{
        lexer::{Lexer, TokenSource},
        tokens::{Token, TokenKind},
    },
    SourceFile,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_stmt_safely,
};

/// Marker returned when a production cannot continue. The error that caused
/// it has already been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unwind;

pub type ParseResult<T> = Result<T, Unwind>;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Where tokens come from
    source: Box<dyn TokenSource>,
    /// The token currently being considered
    tok: Token,
    /// The most recently consumed token
    previous: Option<Token>,
    /// Number of tokens consumed so far
    consumed: usize,
    /// How many `while`/`for` bodies enclose the current position
    loop_depth: usize,
    /// How many blocks enclose the current position
    block_depth: usize,
    /// Errors found so far, shared with the token source's error handler
    diagnostics: Rc<RefCell<Diagnostics>>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operator binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser reading from `source`.
    ///
    /// Lexical errors reported by the source land in the same diagnostics as
    /// the parser's own errors. The first token is read immediately.
    pub fn new(mut source: Box<dyn TokenSource>) -> Self {
        let diagnostics = Rc::new(RefCell::new(Diagnostics::new()));

        let sink = Rc::clone(&diagnostics);
        source.set_error_handler(Box::new(move |token: &Token, message: &str| {
            sink.borrow_mut().report(SyntaxError::new(
                ErrorImpl::Lexical {
                    message: message.to_string(),
                },
                token.start.clone(),
                token.end.clone(),
            ));
        }));

        let tok = source.next_token();
        let mut parser = Parser {
            source,
            tok,
            previous: None,
            consumed: 0,
            loop_depth: 0,
            block_depth: 0,
            diagnostics,
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tok
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tok.kind
    }

    /// Returns the last token consumed, if any.
    pub fn previous_token(&self) -> Option<&Token> {
        self.previous.as_ref()
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let token = std::mem::replace(&mut self.tok, next);
        self.previous = Some(token.clone());
        self.consumed += 1;
        token
    }

    /// Consumes the current token if it has the expected kind, otherwise
    /// records an error and unwinds.
    pub fn expect(&mut self, expected_kind: TokenKind) -> ParseResult<Token> {
        if self.current_token_kind() == expected_kind {
            return Ok(self.advance());
        }

        let error = self.error_at_current(ErrorImpl::UnexpectedToken {
            found: self.current_token_kind(),
            expected: vec![expected_kind],
        });
        Err(self.fail(error))
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Builds an error spanning the current token.
    pub fn error_at_current(&self, error_impl: ErrorImpl) -> SyntaxError {
        SyntaxError::new(error_impl, self.tok.start.clone(), self.tok.end.clone())
    }

    /// Records an error without interrupting the current production.
    pub fn record(&mut self, error: SyntaxError) {
        self.diagnostics.borrow_mut().report(error);
    }

    /// Records an error and returns the marker to unwind with.
    pub fn fail(&mut self, error: SyntaxError) -> Unwind {
        self.record(error);
        Unwind
    }

    /// Skips tokens until a statement boundary: just past a `;`, or at a
    /// token that starts a statement, or at EOF. Inside a block the
    /// closing `}` is also a boundary and is left for the block.
    pub fn synchronize(&mut self) {
        while self.has_tokens() {
            match self.current_token_kind() {
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                TokenKind::CloseCurly if self.in_block() => return,
                kind if self.get_stmt_lookup().contains_key(&kind) => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    pub fn enter_loop(&mut self) {
        self.loop_depth += 1;
    }

    pub fn exit_loop(&mut self) {
        self.loop_depth = self.loop_depth.saturating_sub(1);
    }

    pub fn in_loop(&self) -> bool {
        self.loop_depth > 0
    }

    pub fn enter_block(&mut self) {
        self.block_depth += 1;
    }

    pub fn exit_block(&mut self) {
        self.block_depth = self.block_depth.saturating_sub(1);
    }

    pub fn in_block(&self) -> bool {
        self.block_depth > 0
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// The binding power of `kind` as a binary operator.
    pub fn binding_power(&self, kind: TokenKind) -> Option<BindingPower> {
        self.binding_power_lookup.get(&kind).copied()
    }

    /// Registers a binary operator with its binding power.
    pub fn binary(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a statement handler for the token that starts it.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Hands back every error recorded so far.
    pub fn finish(&mut self) -> Result<(), SyntaxErrors> {
        self.diagnostics.borrow_mut().take()
    }
}

/// Parses every statement `tokens` produces.
///
/// The program is always returned, even alongside errors; statements that
/// failed to parse appear as `Stmt::Illegal`.
pub fn parse_tokens(tokens: Box<dyn TokenSource>) -> (Program, Result<(), SyntaxErrors>) {
    let mut parser = Parser::new(tokens);

    let mut stmts = vec![];
    while parser.has_tokens() {
        stmts.push(parse_stmt_safely(&mut parser));
    }

    (Program { stmts }, parser.finish())
}

pub fn parse_source(source: Rc<SourceFile>) -> (Program, Result<(), SyntaxErrors>) {
    parse_tokens(Box::new(Lexer::new(source)))
}

pub fn parse_str(source: &str, file: &str) -> (Program, Result<(), SyntaxErrors>) {
    parse_source(Rc::new(SourceFile::new(file, source)))
}

/// Parses the source read from `reader`, naming it `file` in diagnostics.
///
/// If the reader fails the program is empty and the error is `Error::Io`.
pub fn parse<R: Read>(reader: R, file: &str) -> (Program, Result<(), Error>) {
    match SourceFile::from_reader(file, reader) {
        Ok(source) => {
            let (program, result) = parse_source(Rc::new(source));
            (program, result.map_err(Error::from))
        }
        Err(err) => (Program::default(), Err(Error::from(err))),
    }
}
