use std::rc::Rc;

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{Position, SourceFile, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Callback invoked by a token source when it meets input it cannot scan.
pub type ErrorHandler = Box<dyn FnMut(&Token, &str)>;

/// A pull-based producer of positioned tokens.
///
/// Once the input is exhausted every further call to `next_token` returns an
/// `EOF` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
    fn set_error_handler(&mut self, handler: ErrorHandler);
}

/// Handlers consume `len` bytes of matched input. Returning `None` means the
/// input was skipped (whitespace, comments).
pub type RegexHandler = fn(&mut Lexer, usize) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//(?-u:[^\n])*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r#"^"(?-u:[^"])*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^"(?-u:[^"])*"#).unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new(r"^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new(r"^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: Regex::new(r"^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals) },
        RegexPattern { regex: Regex::new(r"^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals) },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new(r"^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
        RegexPattern { regex: Regex::new(r"^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: Regex::new(r"^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new(r"^\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot) },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new(r"^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
        RegexPattern { regex: Regex::new(r"^\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question) },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new(r"^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent) },
        RegexPattern { regex: Regex::new(r"^(?s).").unwrap(), handler: invalid_character_handler },
        RegexPattern { regex: Regex::new(r"^(?s-u:.)").unwrap(), handler: invalid_byte_handler },
    ];
}

pub struct Lexer {
    source: Rc<SourceFile>,
    pos: usize,
    line: usize,
    column: usize,
    error_handler: Option<ErrorHandler>,
}

impl Lexer {
    pub fn new(source: Rc<SourceFile>) -> Lexer {
        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
            error_handler: None,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(Rc::clone(&self.source), self.line, self.column)
    }

    /// Advances over `len` bytes, returning the lexeme and its start and end
    /// positions.
    pub fn consume(&mut self, len: usize) -> (String, Position, Position) {
        let start = self.position();
        let end_pos = (self.pos + len).min(self.source.contents().len());
        let bytes = &self.source.contents()[self.pos..end_pos];

        for byte in bytes {
            if *byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        let value = String::from_utf8_lossy(bytes).into_owned();
        self.pos = end_pos;
        (value, start, self.position())
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.contents().len()
    }

    fn report(&mut self, token: &Token, message: &str) {
        if let Some(handler) = self.error_handler.as_mut() {
            handler(token, message);
        }
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                let position = self.position();
                return MK_TOKEN!(TokenKind::EOF, String::new(), position.clone(), position);
            }

            let source = Rc::clone(&self.source);
            let remainder = &source.contents()[self.pos..];
            let matched = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remainder).map(|m| (pattern.handler, m.end())));

            let token = match matched {
                Some((handler, len)) => handler(self, len),
                None => invalid_byte_handler(self, 1),
            };

            if let Some(token) = token {
                return token;
            }
        }
    }

    fn set_error_handler(&mut self, handler: ErrorHandler) {
        self.error_handler = Some(handler);
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    lexer.consume(len);
    None
}

fn symbol_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let (value, start, end) = lexer.consume(len);
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, value, start, end))
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let (value, start, end) = lexer.consume(len);
    Some(MK_TOKEN!(TokenKind::Number, value, start, end))
}

fn string_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let (value, start, end) = lexer.consume(len);
    Some(MK_TOKEN!(TokenKind::String, value, start, end))
}

fn unterminated_string_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let (value, start, end) = lexer.consume(len);
    let token = MK_TOKEN!(TokenKind::Illegal, value, start, end);
    lexer.report(&token, "unterminated string literal");
    Some(token)
}

fn invalid_character_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let (value, start, end) = lexer.consume(len);
    let message = match value.chars().next() {
        Some(ch) => format!("invalid character {:?}", ch),
        None => String::from("invalid character"),
    };

    let token = MK_TOKEN!(TokenKind::Illegal, value, start, end);
    lexer.report(&token, &message);
    Some(token)
}

fn invalid_byte_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let byte = lexer.source.contents().get(lexer.pos).copied().unwrap_or_default();
    let (value, start, end) = lexer.consume(len);
    let token = MK_TOKEN!(TokenKind::Illegal, value, start, end);
    lexer.report(&token, &format!("invalid UTF-8 byte 0x{:02x}", byte));
    Some(token)
}

/// Scans the whole of `source`, returning every token including the final
/// `EOF`. Lexical errors are not collected.
pub fn tokenize(source: Rc<SourceFile>) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
