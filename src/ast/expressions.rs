use crate::{lexer::tokens::Token, Span};

use super::ast::Expr;

/// The decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}

// LITERALS

/// Literal Expression
/// Represents a number, string, boolean or nil literal.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub token: Token,
    pub value: LiteralValue,
}

/// Variable Expression
/// Represents a reference to a variable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: Token,
}

/// Group Expression
/// A parenthesised expression. Both parentheses are kept for their positions.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpr {
    pub open_paren: Token,
    pub expression: Box<Expr>,
    pub close_paren: Token,
}

// OPERATORS

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Binary Expression
/// Covers arithmetic, comparison, logical `and`/`or` and the comma operator.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub condition: Box<Expr>,
    pub then_expr: Box<Expr>,
    pub else_expr: Box<Expr>,
}

/// Assignment Expression
/// The target is always a variable name; invalid targets never produce this
/// node.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub name: Token,
    pub value: Box<Expr>,
}

/// Illegal Expression
/// Stands in for an expression that could not be parsed. The error has
/// already been reported, so evaluation must never reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct IllegalExpr {
    pub span: Span,
}
