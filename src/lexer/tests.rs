//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric and string literals
//! - Operators and punctuation
//! - Comments
//! - Positions
//! - Error reporting through the handler

use std::{cell::RefCell, rc::Rc};

use crate::SourceFile;

use super::{
    lexer::{tokenize, Lexer, TokenSource},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(Rc::new(SourceFile::new("test.lox", source)))
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("print var true false nil if else and or while for break continue fun return class this super"),
        vec![
            TokenKind::Print,
            TokenKind::Var,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Nil,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::While,
            TokenKind::For,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Fun,
            TokenKind::Return,
            TokenKind::Class,
            TokenKind::This,
            TokenKind::Super,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize(Rc::new(SourceFile::new("test.lox", "foo baz_123 _under printer")));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_under");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "printer");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_literals() {
    let tokens = tokenize(Rc::new(SourceFile::new("test.lox", r#"42 3.14 "hello world""#)));

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "\"hello world\"");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % == != < > <= >= = ! ? : , . ; ( ) { }"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::Question,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    assert_eq!(
        kinds("var x = 5; // this is a comment\nprint x;"),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Print,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_positions() {
    let tokens = tokenize(Rc::new(SourceFile::new("test.lox", "var x\n  = \"a\nb\";")));

    assert_eq!((tokens[0].start.line, tokens[0].start.column), (1, 1));
    assert_eq!((tokens[0].end.line, tokens[0].end.column), (1, 4));
    assert_eq!((tokens[1].start.line, tokens[1].start.column), (1, 5));
    assert_eq!((tokens[2].start.line, tokens[2].start.column), (2, 3));
    // strings may span lines
    assert_eq!((tokens[3].start.line, tokens[3].start.column), (2, 5));
    assert_eq!((tokens[3].end.line, tokens[3].end.column), (3, 3));
    assert_eq!((tokens[4].start.line, tokens[4].start.column), (3, 3));
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new(Rc::new(SourceFile::new("test.lox", "1")));

    assert_eq!(lexer.next_token().kind, TokenKind::Number);
    let eof = lexer.next_token();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.start, eof.end);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_invalid_input_is_reported() {
    let reported = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reported);

    let mut lexer = Lexer::new(Rc::new(SourceFile::new("test.lox", b"1 @ \xff \"open".to_vec())));
    lexer.set_error_handler(Box::new(move |token, message| {
        sink.borrow_mut()
            .push((token.start.column, message.to_string()));
    }));

    let mut kinds = vec![];
    loop {
        let token = lexer.next_token();
        kinds.push(token.kind);
        if token.kind == TokenKind::EOF {
            break;
        }
    }

    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Illegal,
            TokenKind::Illegal,
            TokenKind::Illegal,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        *reported.borrow(),
        vec![
            (3, String::from("invalid character '@'")),
            (5, String::from("invalid UTF-8 byte 0xff")),
            (7, String::from("unterminated string literal")),
        ]
    );
}

#[test]
fn test_wide_characters_advance_by_bytes() {
    let tokens = tokenize(Rc::new(SourceFile::new("test.lox", "\"日本\" x")));

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].end.column, 9);
    assert_eq!(tokens[1].start.column, 10);
}
