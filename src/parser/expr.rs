use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, GroupExpr, IllegalExpr, LiteralExpr, LiteralValue,
            TernaryExpr, UnaryExpr, VariableExpr,
        },
    },
    errors::errors::{ErrorImpl, SyntaxError},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    lookups::BindingPower,
    parser::{ParseResult, Parser},
};

/// Parses a full expression, comma operator included.
pub fn parse_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parse_operand(parser, BindingPower::Default)
}

/// Parses a left-associative chain of the binary operators registered at
/// `bp`.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    let mut left = parse_operand(parser, bp)?;

    while parser.binding_power(parser.current_token_kind()) == Some(bp) {
        let operator = parser.advance();
        let right = parse_operand(parser, bp)?;

        left = Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

/// Parses one operand of an operator at level `bp`, which is everything
/// that binds tighter.
pub fn parse_operand(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    match bp.tighter() {
        BindingPower::Assignment => parse_assignment_expr(parser),
        BindingPower::Ternary => parse_ternary_expr(parser),
        BindingPower::Unary | BindingPower::Primary => parse_unary_expr(parser),
        tighter => parse_binary_expr(parser, tighter),
    }
}

pub fn parse_assignment_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let target = parse_ternary_expr(parser)?;

    if parser.current_token_kind() != TokenKind::Assignment {
        return Ok(target);
    }
    parser.advance();

    // right-associative: `a = b = c` assigns `b = c` to `a`
    let value = parse_assignment_expr(parser)?;

    match target {
        Expr::Variable(variable) => Ok(Expr::Assignment(AssignmentExpr {
            name: variable.name,
            value: Box::new(value),
        })),
        target => {
            let target_span = target.span();
            parser.record(SyntaxError::spanning(
                ErrorImpl::InvalidAssignmentTarget,
                target_span.clone(),
            ));

            Ok(Expr::Illegal(IllegalExpr {
                span: Span::new(target_span.start, value.span().end),
            }))
        }
    }
}

pub fn parse_ternary_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let condition = parse_binary_expr(parser, BindingPower::LogicalOr)?;

    if parser.current_token_kind() != TokenKind::Question {
        return Ok(condition);
    }
    parser.advance();

    let then_expr = parse_expr(parser)?;
    parser.expect(TokenKind::Colon)?;
    let else_expr = parse_ternary_expr(parser)?;

    Ok(Expr::Ternary(TernaryExpr {
        condition: Box::new(condition),
        then_expr: Box::new(then_expr),
        else_expr: Box::new(else_expr),
    }))
}

pub fn parse_unary_expr(parser: &mut Parser) -> ParseResult<Expr> {
    if !parser.current_token().is_one_of_many(&[TokenKind::Not, TokenKind::Dash]) {
        return parse_primary_expr(parser);
    }

    let operator = parser.advance();
    let right = parse_unary_expr(parser)?;

    Ok(Expr::Unary(UnaryExpr {
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_primary_expr(parser: &mut Parser) -> ParseResult<Expr> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();
            match token.value.parse::<f64>() {
                Ok(number) => Ok(literal(token, LiteralValue::Number(number))),
                Err(_) => {
                    let error = SyntaxError::spanning(
                        ErrorImpl::NumberParseError {
                            literal: token.value.clone(),
                        },
                        token.span(),
                    );
                    Err(parser.fail(error))
                }
            }
        }
        TokenKind::String => {
            let token = parser.advance();
            let value = token
                .value
                .strip_prefix('"')
                .and_then(|value| value.strip_suffix('"'))
                .unwrap_or(token.value.as_str())
                .to_string();
            Ok(literal(token, LiteralValue::String(value)))
        }
        TokenKind::True => Ok(literal(parser.advance(), LiteralValue::Bool(true))),
        TokenKind::False => Ok(literal(parser.advance(), LiteralValue::Bool(false))),
        TokenKind::Nil => Ok(literal(parser.advance(), LiteralValue::Nil)),
        TokenKind::Identifier => Ok(Expr::Variable(VariableExpr {
            name: parser.advance(),
        })),
        TokenKind::OpenParen => parse_group_expr(parser),
        kind => match missing_left_operand(parser, kind) {
            Some(bp) => parse_missing_operand_expr(parser, bp),
            None => {
                let error = parser.error_at_current(ErrorImpl::ExpectedExpression { found: kind });
                Err(parser.fail(error))
            }
        },
    }
}

pub fn parse_group_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let open_paren = parser.advance();
    let expression = parse_expr(parser)?;

    if parser.current_token_kind() != TokenKind::CloseParen {
        let error = parser.error_at_current(ErrorImpl::UnclosedGroup {
            found: parser.current_token_kind(),
            line: open_paren.start.line,
            column: open_paren.start.column,
        });
        return Err(parser.fail(error));
    }
    let close_paren = parser.advance();

    Ok(Expr::Group(GroupExpr {
        open_paren,
        expression: Box::new(expression),
        close_paren,
    }))
}

/// Binary operators that can never start an expression. `-` is unary and
/// `,` only ever separates.
fn missing_left_operand(parser: &Parser, kind: TokenKind) -> Option<BindingPower> {
    match kind {
        TokenKind::Dash | TokenKind::Comma => None,
        kind => parser.binding_power(kind),
    }
}

/// A binary operator with no left operand: reported, then parsed as if the
/// operand had been there so the right-hand side is still checked.
fn parse_missing_operand_expr(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    let operator = parser.advance();
    parser.record(SyntaxError::spanning(
        ErrorImpl::MissingOperand {
            operator: operator.kind,
        },
        operator.span(),
    ));

    let right = parse_operand(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(Expr::Illegal(IllegalExpr {
            span: Span::new(operator.start.clone(), operator.start.clone()),
        })),
        operator,
        right: Box::new(right),
    }))
}

fn literal(token: Token, value: LiteralValue) -> Expr {
    Expr::Literal(LiteralExpr { token, value })
}
