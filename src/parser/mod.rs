//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. Expressions are parsed by precedence climbing over a
//! table of binding powers, statements by handlers keyed on their first
//! token. It handles:
//!
//! - Statement parsing (declarations, blocks, control flow, `break`/`continue`)
//! - Expression parsing (comma, assignment, ternary, binary and unary operators)
//! - Error recovery, resynchronising at statement boundaries
//!
//! Every error found along the way is collected; a parse never stops early.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
