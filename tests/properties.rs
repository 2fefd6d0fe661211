//! Property-based tests with proptest.
//!
//! Arbitrary input must always produce a program and a consistent error
//! set. Generated well-formed programs must parse cleanly, one top-level
//! statement per generated statement.

use std::collections::HashSet;

use loxparse::{ast::ast::Program, parse, parse_str, SyntaxErrors};
use proptest::prelude::*;

// -- Expression strategies --

/// Identifiers get a prefix so they can never collide with a keyword.
fn identifier() -> impl Strategy<Value = String> {
    "v_[a-z0-9]{0,5}".prop_map(|s| s)
}

fn literal() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,3}(\\.[0-9]{1,2})?".prop_map(|s| s),
        "\"[a-z ]{0,6}\"".prop_map(|s| s),
        Just(String::from("true")),
        Just(String::from("false")),
        Just(String::from("nil")),
    ]
}

const BINARY_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "==", "!=", "<", "<=", ">", ">=", "and", "or", ",",
];

const UNARY_OPERATORS: &[&str] = &["!", "-"];

fn expr() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![literal(), identifier()];

    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(BINARY_OPERATORS), inner.clone())
                .prop_map(|(left, op, right)| format!("({} {} {})", left, op, right)),
            (prop::sample::select(UNARY_OPERATORS), inner.clone())
                .prop_map(|(op, right)| format!("{}{}", op, right)),
            (inner.clone(), inner.clone(), inner)
                .prop_map(|(c, t, e)| format!("({} ? {} : {})", c, t, e)),
        ]
    })
}

// -- Statement strategies --

fn stmt() -> impl Strategy<Value = String> {
    let simple = prop_oneof![
        expr().prop_map(|e| format!("print {};", e)),
        expr().prop_map(|e| format!("{};", e)),
        (identifier(), expr()).prop_map(|(name, e)| format!("var {} = {};", name, e)),
        identifier().prop_map(|name| format!("var {};", name)),
        (identifier(), expr()).prop_map(|(name, e)| format!("{} = {};", name, e)),
    ];

    simple.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|body| format!("{{ {} }}", body.join(" "))),
            (expr(), inner.clone())
                .prop_map(|(c, body)| format!("while ({}) {{ {} break; }}", c, body)),
            (identifier(), expr(), inner.clone()).prop_map(|(name, c, body)| format!(
                "for (var {name} = 0; {c}; {name} = {name} + 1) {{ continue; {body} }}"
            )),
            (expr(), inner.clone(), inner)
                .prop_map(|(c, t, e)| format!("if ({}) {} else {}", c, t, e)),
        ]
    })
}

// -- Token soup --

const FRAGMENTS: &[&str] = &[
    "var", "x", "=", "1", "(", ")", "{", "}", ";", "+", "==", "?", ":", ",", "print", "while",
    "for", "break", "continue", "if", "else", "!", "-", "\"s\"", "@", "\"", "\n",
];

fn token_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40).prop_map(|parts| parts.join(" "))
}

// -- Checks --

fn assert_consistent(program: &Program, result: &Result<(), SyntaxErrors>) {
    if let Err(errors) = result {
        assert!(!errors.is_empty());

        let mut seen = HashSet::new();
        for error in errors {
            assert!(
                seen.insert((error.start.line, error.start.column)),
                "two errors reported at {}",
                error.start
            );
            let _ = error.render(true);
        }
    }

    if program.iter().any(|stmt| stmt.is_illegal()) {
        assert!(result.is_err(), "illegal statement without an error");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn arbitrary_bytes_always_parse(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let (program, result) = parse(&bytes[..], "fuzz.lox");
        let result = result.map_err(|err| err.syntax_errors().cloned().unwrap_or_default());
        assert_consistent(&program, &result);
    }

    #[test]
    fn token_soup_always_parses(source in token_soup()) {
        let (program, result) = parse_str(&source, "soup.lox");
        assert_consistent(&program, &result);
    }

    #[test]
    fn generated_programs_parse_cleanly(stmts in prop::collection::vec(stmt(), 0..8)) {
        let source = stmts.join("\n");
        let (program, result) = parse_str(&source, "gen.lox");

        prop_assert!(result.is_ok(), "errors in {:?}: {}", source, result.unwrap_err());
        prop_assert_eq!(program.len(), stmts.len());
    }
}
