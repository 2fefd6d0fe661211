use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, GroupExpr, IllegalExpr, LiteralExpr, TernaryExpr, UnaryExpr,
        VariableExpr,
    },
    statements::{
        BlockStmt, BreakStmt, ContinueStmt, ExpressionStmt, ForStmt, IfStmt, IllegalStmt,
        PrintStmt, VarDeclStmt, WhileStmt,
    },
};

/// Statement
///
/// Every kind of statement the parser can produce. `Illegal` marks source
/// that was skipped during error recovery.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Print(PrintStmt),
    VarDecl(VarDeclStmt),
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Illegal(IllegalStmt),
}

impl Stmt {
    /// Returns the span of the statement, from its first token to its last.
    pub fn span(&self) -> Span {
        match self {
            Stmt::Expression(stmt) => {
                Span::new(stmt.expression.span().start, stmt.semicolon.end.clone())
            }
            Stmt::Print(stmt) => Span::new(stmt.print.start.clone(), stmt.semicolon.end.clone()),
            Stmt::VarDecl(stmt) => Span::new(stmt.var.start.clone(), stmt.semicolon.end.clone()),
            Stmt::Block(stmt) => {
                Span::new(stmt.open_curly.start.clone(), stmt.close_curly.end.clone())
            }
            Stmt::If(stmt) => {
                let last = stmt.else_body.as_ref().unwrap_or(&stmt.then_body);
                Span::new(stmt.if_token.start.clone(), last.span().end)
            }
            Stmt::While(stmt) => Span::new(stmt.while_token.start.clone(), stmt.body.span().end),
            Stmt::For(stmt) => Span::new(stmt.for_token.start.clone(), stmt.body.span().end),
            Stmt::Break(stmt) => Span::new(stmt.keyword.start.clone(), stmt.semicolon.end.clone()),
            Stmt::Continue(stmt) => {
                Span::new(stmt.keyword.start.clone(), stmt.semicolon.end.clone())
            }
            Stmt::Illegal(stmt) => Span::new(stmt.from.start.clone(), stmt.to.end.clone()),
        }
    }

    pub fn is_illegal(&self) -> bool {
        matches!(self, Stmt::Illegal(_))
    }
}

/// Expression
///
/// Every kind of expression the parser can produce. `Illegal` is a
/// placeholder for an operand or target that was reported as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Variable(VariableExpr),
    Group(GroupExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Ternary(TernaryExpr),
    Assignment(AssignmentExpr),
    Illegal(IllegalExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(expr) => expr.token.span(),
            Expr::Variable(expr) => expr.name.span(),
            Expr::Group(expr) => {
                Span::new(expr.open_paren.start.clone(), expr.close_paren.end.clone())
            }
            Expr::Unary(expr) => Span::new(expr.operator.start.clone(), expr.right.span().end),
            Expr::Binary(expr) => Span::new(expr.left.span().start, expr.right.span().end),
            Expr::Ternary(expr) => Span::new(expr.condition.span().start, expr.else_expr.span().end),
            Expr::Assignment(expr) => Span::new(expr.name.start.clone(), expr.value.span().end),
            Expr::Illegal(expr) => expr.span.clone(),
        }
    }

    pub fn is_illegal(&self) -> bool {
        matches!(self, Expr::Illegal(_))
    }
}

/// The root of the tree: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.stmts.iter()
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}
