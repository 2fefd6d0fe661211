use crate::{
    ast::{
        ast::Stmt,
        statements::{
            BlockStmt, BreakStmt, ContinueStmt, ExpressionStmt, ForStmt, IfStmt, IllegalStmt,
            PrintStmt, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{ErrorImpl, SyntaxError},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::parse_expr,
    parser::{ParseResult, Parser, Unwind},
};

/// Parses one statement, recovering from any error inside it.
///
/// On failure the parser skips to the next statement boundary and the
/// skipped tokens become a `Stmt::Illegal`. At least one token is always
/// consumed, so callers looping on this always make progress.
pub fn parse_stmt_safely(parser: &mut Parser) -> Stmt {
    let from = parser.current_token().clone();
    let consumed = parser.consumed();

    match parse_stmt(parser) {
        Ok(stmt) => stmt,
        Err(Unwind) => {
            parser.synchronize();
            if parser.consumed() == consumed {
                parser.advance();
            }

            let to = parser.previous_token().cloned().unwrap_or_else(|| from.clone());
            Stmt::Illegal(IllegalStmt { from, to })
        }
    }
}

pub fn parse_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let expression = parse_expr(parser)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt {
        expression,
        semicolon,
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let print = parser.advance();
    let expression = parse_expr(parser)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Print(PrintStmt {
        print,
        expression,
        semicolon,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let var = parser.advance();
    let name = parser.expect(TokenKind::Identifier)?;

    let initialiser = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        var,
        name,
        initialiser,
        semicolon,
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let open_curly = parser.advance();

    parser.enter_block();
    let mut body = vec![];
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        body.push(parse_stmt_safely(parser));
    }
    parser.exit_block();

    let close_curly = parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::Block(BlockStmt {
        open_curly,
        body,
        close_curly,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let if_token = parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = Box::new(parse_stmt(parser)?);
    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        if_token,
        condition,
        then_body,
        else_body,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let while_token = parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = Box::new(parse_loop_body(parser)?);

    Ok(Stmt::While(WhileStmt {
        while_token,
        condition,
        body,
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let for_token = parser.advance();
    parser.expect(TokenKind::OpenParen)?;

    let initialise = match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            None
        }
        TokenKind::Var => Some(Box::new(parse_var_decl_stmt(parser)?)),
        _ => Some(Box::new(parse_expression_stmt(parser)?)),
    };

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon)?;

    let update = if parser.current_token_kind() != TokenKind::CloseParen {
        Some(parse_expr(parser)?)
    } else {
        None
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = Box::new(parse_loop_body(parser)?);

    Ok(Stmt::For(ForStmt {
        for_token,
        initialise,
        condition,
        update,
        body,
    }))
}

/// The depth is restored before any error propagates.
fn parse_loop_body(parser: &mut Parser) -> ParseResult<Stmt> {
    parser.enter_loop();
    let body = parse_stmt(parser);
    parser.exit_loop();
    body
}

pub fn parse_break_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let keyword = parser.advance();
    check_in_loop(parser, &keyword);
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Break(BreakStmt { keyword, semicolon }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let keyword = parser.advance();
    check_in_loop(parser, &keyword);
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Continue(ContinueStmt { keyword, semicolon }))
}

fn check_in_loop(parser: &mut Parser, keyword: &Token) {
    if !parser.in_loop() {
        parser.record(SyntaxError::spanning(
            ErrorImpl::OutsideLoop {
                keyword: keyword.kind,
            },
            keyword.span(),
        ));
    }
}
