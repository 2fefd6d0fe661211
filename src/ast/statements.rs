use std::slice::Iter;

use crate::lexer::tokens::Token;

use super::ast::{Expr, Stmt};

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub semicolon: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub print: Token,
    pub expression: Expr,
    pub semicolon: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub var: Token,
    pub name: Token,
    pub initialiser: Option<Expr>,
    pub semicolon: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub open_curly: Token,
    pub body: Vec<Stmt>,
    pub close_curly: Token,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub if_token: Token,
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub while_token: Token,
    pub condition: Expr,
    pub body: Box<Stmt>,
}

/// C-style `for` loop. Each header clause is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub for_token: Token,
    pub initialise: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    pub update: Option<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub keyword: Token,
    pub semicolon: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub keyword: Token,
    pub semicolon: Token,
}

/// Illegal Statement
/// Marks the tokens skipped while recovering from a syntax error, from the
/// token the statement started at to the last token discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct IllegalStmt {
    pub from: Token,
    pub to: Token,
}
