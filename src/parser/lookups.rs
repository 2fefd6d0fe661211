use std::collections::HashMap;

use crate::{ast::ast::Stmt, lexer::tokens::TokenKind};

use super::{parser::{ParseResult, Parser}, stmt::*};

/// Precedence levels, loosest first. `Default` sits below every operator
/// and is where a full expression starts.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Comma,
    Assignment,
    Ternary,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Primary,
}

impl BindingPower {
    /// The level operands of an operator at this level are parsed at.
    pub fn tighter(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Comma,
            BindingPower::Comma => BindingPower::Assignment,
            BindingPower::Assignment => BindingPower::Ternary,
            BindingPower::Ternary => BindingPower::LogicalOr,
            BindingPower::LogicalOr => BindingPower::LogicalAnd,
            BindingPower::LogicalAnd => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative => BindingPower::Unary,
            BindingPower::Unary | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> ParseResult<Stmt>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.binary(TokenKind::Comma, BindingPower::Comma);

    // Logical
    parser.binary(TokenKind::Or, BindingPower::LogicalOr);
    parser.binary(TokenKind::And, BindingPower::LogicalAnd);

    // Equality and relational
    parser.binary(TokenKind::Equals, BindingPower::Equality);
    parser.binary(TokenKind::NotEquals, BindingPower::Equality);
    parser.binary(TokenKind::Less, BindingPower::Relational);
    parser.binary(TokenKind::LessEquals, BindingPower::Relational);
    parser.binary(TokenKind::Greater, BindingPower::Relational);
    parser.binary(TokenKind::GreaterEquals, BindingPower::Relational);

    // Additive and multiplicative
    parser.binary(TokenKind::Plus, BindingPower::Additive);
    parser.binary(TokenKind::Dash, BindingPower::Additive);
    parser.binary(TokenKind::Star, BindingPower::Multiplicative);
    parser.binary(TokenKind::Slash, BindingPower::Multiplicative);
    parser.binary(TokenKind::Percent, BindingPower::Multiplicative);

    // Statements. These tokens are also where recovery resynchronises.
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::Continue, parse_continue_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
