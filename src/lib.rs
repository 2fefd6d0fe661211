#![allow(clippy::module_inception)]

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    io::{self, Read},
    rc::Rc,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use errors::errors::{Error, SyntaxError, SyntaxErrors};
pub use parser::parser::{parse, parse_source, parse_str, parse_tokens};

/// A named piece of source text.
///
/// The contents are kept as raw bytes so that a line which is not valid
/// UTF-8 can still be addressed; the diagnostic renderer decides what to do
/// with it.
pub struct SourceFile {
    name: String,
    contents: Vec<u8>,
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        let contents = contents.into();
        let mut line_starts = vec![0];
        line_starts.extend(
            contents
                .iter()
                .enumerate()
                .filter(|(_, byte)| **byte == b'\n')
                .map(|(i, _)| i + 1),
        );

        SourceFile {
            name: name.into(),
            contents,
            line_starts,
        }
    }

    /// Reads the whole of `reader` into a new source file.
    pub fn from_reader<R: Read>(name: impl Into<String>, mut reader: R) -> io::Result<Self> {
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents)?;
        Ok(SourceFile::new(name, contents))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the bytes of the 1-based line `number`, without its line
    /// terminator.
    pub fn line(&self, number: usize) -> Option<&[u8]> {
        let start = *self.line_starts.get(number.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(number)
            .map(|next| next - 1)
            .unwrap_or(self.contents.len());

        let line = &self.contents[start..end];
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.contents.len())
            .finish()
    }
}

/// A 1-based line and byte column inside a source file.
#[derive(Clone)]
pub struct Position {
    pub file: Rc<SourceFile>,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(file: Rc<SourceFile>, line: usize, column: usize) -> Self {
        Position { file, line, column }
    }

    fn same_file(&self, other: &Position) -> bool {
        Rc::ptr_eq(&self.file, &other.file) || self.file.name == other.file.name
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line && self.column == other.column && self.same_file(other)
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    /// Positions are only ordered within one file.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_file(other) {
            return None;
        }
        Some((self.line, self.column).cmp(&(other.line, other.column)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.name, self.line, self.column)
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A half-open range of source, `end` being exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{Position, SourceFile};

    #[test]
    fn test_line_lookup() {
        let file = SourceFile::new("test.lox", "Hello, world!\r\nsecond\n\nTesting { }\n");

        assert_eq!(file.line(1), Some(&b"Hello, world!"[..]));
        assert_eq!(file.line(2), Some(&b"second"[..]));
        assert_eq!(file.line(3), Some(&b""[..]));
        assert_eq!(file.line(4), Some(&b"Testing { }"[..]));
        assert_eq!(file.line(5), Some(&b""[..]));
        assert_eq!(file.line(6), None);
        assert_eq!(file.line(0), None);
    }

    #[test]
    fn test_line_lookup_without_trailing_newline() {
        let file = SourceFile::new("test.lox", "a\nb");

        assert_eq!(file.line_count(), 2);
        assert_eq!(file.line(2), Some(&b"b"[..]));
    }

    #[test]
    fn test_position_ordering() {
        let file = Rc::new(SourceFile::new("test.lox", "a\nb"));
        let first = Position::new(Rc::clone(&file), 1, 4);
        let second = Position::new(Rc::clone(&file), 2, 1);

        assert!(first < second);
        assert_eq!(first, Position::new(file, 1, 4));
        assert_eq!(first.to_string(), "test.lox:1:4");
    }
}
