//! 语句解析

use crate::ast::{Block, Expr, ReturnExpr};
use crate::error::TallyResult;
use crate::lexer::Token;
use super::Parser;

/// 解析语句块，直到 '}' 或输入结束（不消费 '}'）
pub fn parse_block(parser: &mut Parser) -> TallyResult<Block> {
    let loc = parser.current_loc();
    let mut statements = Vec::new();

    while !parser.check(&Token::RBrace) && !parser.is_at_end() {
        let expr = parser.parse_expression()?;
        let is_return = expr.is_return();
        statements.push(expr);

        // return 已经自行处理了可选的 ';'
        if is_return {
            skip_unreachable(parser);
            break;
        }
        parser.consume(&Token::Semicolon, "Expected ';' after expression")?;
    }

    Ok(Block { statements, loc })
}

/// 解析 return 语句，末尾的 ';' 可选
pub fn parse_return_statement(parser: &mut Parser) -> TallyResult<Expr> {
    let loc = parser.current_loc();
    parser.consume(&Token::Return, "Expected 'return'")?;

    let value = parser.parse_expression()?;
    parser.match_token(&Token::Semicolon);

    Ok(Expr::Return(ReturnExpr {
        value: Box::new(value),
        loc,
    }))
}

/// 跳过 return 之后同一块内的令牌，停在与之配对的 '}' 前
fn skip_unreachable(parser: &mut Parser) {
    let mut depth = 0usize;
    loop {
        match parser.current_token() {
            Token::Eof => return,
            Token::RBrace if depth == 0 => return,
            Token::RBrace => depth -= 1,
            Token::LBrace => depth += 1,
            _ => {}
        }
        parser.advance();
    }
}
