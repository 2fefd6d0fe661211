//! S-expression rendering of the syntax tree.
//!
//! `(expr (+ 1 (* 2 3)))` is the printed form of `1 + 2 * 3;`. Missing
//! optional parts of a `for` header print as `_`, and placeholders left by
//! error recovery print as `<illegal>`.

use std::fmt::{self, Display, Formatter};

use super::{
    ast::{Expr, Program, Stmt},
    expressions::LiteralValue,
};

const ILLEGAL: &str = "<illegal>";

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(value) => write!(f, "{}", value),
            LiteralValue::String(value) => write!(f, "{:?}", value),
            LiteralValue::Bool(value) => write!(f, "{}", value),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(expr) => write!(f, "{}", expr.value),
            Expr::Variable(expr) => write!(f, "{}", expr.name.value),
            Expr::Group(expr) => write!(f, "(group {})", expr.expression),
            Expr::Unary(expr) => write!(f, "({} {})", expr.operator.kind, expr.right),
            Expr::Binary(expr) => {
                write!(f, "({} {} {})", expr.operator.kind, expr.left, expr.right)
            }
            Expr::Ternary(expr) => write!(
                f,
                "(?: {} {} {})",
                expr.condition, expr.then_expr, expr.else_expr
            ),
            Expr::Assignment(expr) => write!(f, "(= {} {})", expr.name.value, expr.value),
            Expr::Illegal(_) => write!(f, "{}", ILLEGAL),
        }
    }
}

fn write_optional<T: Display>(f: &mut Formatter<'_>, value: Option<&T>) -> fmt::Result {
    match value {
        Some(value) => write!(f, " {}", value),
        None => write!(f, " _"),
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "(expr {})", stmt.expression),
            Stmt::Print(stmt) => write!(f, "(print {})", stmt.expression),
            Stmt::VarDecl(stmt) => match &stmt.initialiser {
                Some(value) => write!(f, "(var {} {})", stmt.name.value, value),
                None => write!(f, "(var {})", stmt.name.value),
            },
            Stmt::Block(stmt) => {
                write!(f, "(block")?;
                for inner in stmt.iter() {
                    write!(f, " {}", inner)?;
                }
                write!(f, ")")
            }
            Stmt::If(stmt) => {
                write!(f, "(if {} {}", stmt.condition, stmt.then_body)?;
                if let Some(else_body) = &stmt.else_body {
                    write!(f, " {}", else_body)?;
                }
                write!(f, ")")
            }
            Stmt::While(stmt) => write!(f, "(while {} {})", stmt.condition, stmt.body),
            Stmt::For(stmt) => {
                write!(f, "(for")?;
                write_optional(f, stmt.initialise.as_ref())?;
                write_optional(f, stmt.condition.as_ref())?;
                write_optional(f, stmt.update.as_ref())?;
                write!(f, " {})", stmt.body)
            }
            Stmt::Break(_) => write!(f, "(break)"),
            Stmt::Continue(_) => write!(f, "(continue)"),
            Stmt::Illegal(_) => write!(f, "{}", ILLEGAL),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
