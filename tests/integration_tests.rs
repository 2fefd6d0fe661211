//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public entry points from source text through
//! scanning, parsing and error rendering.

use std::io::{self, Read};

use loxparse::{ast::ast::Stmt, parse, parse_str, Error};

#[test]
fn test_parse_reader() {
    let source = "var greeting = \"hello\";\nprint greeting;\n";
    let (program, result) = parse(source.as_bytes(), "hello.lox");

    assert!(result.is_ok());
    assert_eq!(program.to_string(), "(var greeting \"hello\")\n(print greeting)");
}

#[test]
fn test_parse_control_flow_program() {
    let source = r#"
        // count to ten, skipping odd numbers
        for (var i = 0; i < 10; i = i + 1) {
            if (i % 2 == 1) continue;
            print i;
        }

        var n = 0;
        while (true) {
            n = n + 1;
            if (n > 3) break;
        }
        print n > 3 ? "done" : "not done";
    "#;
    let (program, result) = parse_str(source, "loops.lox");

    assert!(result.is_ok(), "{}", result.unwrap_err());
    assert_eq!(program.len(), 4);
    assert!(matches!(program.stmts[0], Stmt::For(_)));
    assert!(matches!(program.stmts[2], Stmt::While(_)));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn test_read_failure() {
    let (program, result) = parse(FailingReader, "broken.lox");

    assert!(program.is_empty());
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.syntax_errors().is_none());
    assert_eq!(err.to_string(), "reading source: disk on fire");
}

#[test]
fn test_render_errors() {
    let source = "var a = * 2;\nprint (1;\n";
    let (program, result) = parse(source.as_bytes(), "test.lox");

    assert_eq!(program.to_string(), "(var a (* <illegal> 2))\n<illegal>");

    let err = result.unwrap_err();
    assert_eq!(err.syntax_errors().map(|errors| errors.len()), Some(2));
    assert_eq!(
        err.render(false),
        [
            "test.lox:1:9: syntax error: binary operator * must have left and right operands",
            "var a = * 2;",
            "        ^",
            "test.lox:2:9: syntax error: unexpected ;, expected ) to close ( at 2:7",
            "print (1;",
            "        ^",
        ]
        .join("\n")
    );
}

#[test]
fn test_render_multi_line_error() {
    let source = "(1 +\n 2) = 3;";
    let (_, result) = parse_str(source, "test.lox");

    let errors = result.unwrap_err();
    assert_eq!(
        errors.to_string(),
        [
            "test.lox:1:1: syntax error: left-hand side of assignment must be a variable",
            "(1 +",
            "^^^^",
            " 2) = 3;",
            "^^^",
        ]
        .join("\n")
    );
}

#[test]
fn test_invalid_utf8_renders_header_only() {
    let (program, result) = parse(&b"print \xff;"[..], "bytes.lox");

    assert_eq!(program.to_string(), "<illegal>");
    assert_eq!(
        result.unwrap_err().render(false),
        "bytes.lox:1:7: syntax error: invalid UTF-8 byte 0xff"
    );
}

#[test]
fn test_every_statement_after_an_error_is_still_checked() {
    let source = "print 1\nvar x = ;\n{ break; }\nx = 2;";
    let (program, result) = parse_str(source, "test.lox");

    let messages = result
        .unwrap_err()
        .iter()
        .map(|error| format!("{} {}", error.get_position(), error.message()))
        .collect::<Vec<_>>();

    assert_eq!(
        messages,
        vec![
            "test.lox:2:1 unexpected var, expected ;",
            "test.lox:2:9 unexpected ;, expected expression",
            "test.lox:3:3 break statement must be inside a loop",
        ]
    );
    assert_eq!(program.to_string(), "<illegal>\n<illegal>\n(block (break))\n(expr (= x 2))");
}
