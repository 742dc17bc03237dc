//! 表达式解析
//!
//! 二元表达式使用优先级爬升：`<` 10，`+ -` 20，`* /` 40，同级左结合。

use crate::ast::*;
use crate::error::TallyResult;
use crate::lexer::Token;
use super::Parser;

/// 解析表达式（入口点）
pub fn parse_expression(parser: &mut Parser) -> TallyResult<Expr> {
    let left = parser.parse_primary()?;
    parse_binop_rhs(parser, 0, left)
}

/// 当前令牌对应的二元运算符；不在优先级表中则为 None
fn current_binary_op(parser: &Parser) -> Option<BinaryOp> {
    BinaryOp::from_token(parser.current_token())
}

/// 解析 `left` 之后优先级不低于 `min_prec` 的运算符序列
pub fn parse_binop_rhs(parser: &mut Parser, min_prec: i32, left: Expr) -> TallyResult<Expr> {
    let mut left = left;

    loop {
        let op = match current_binary_op(parser) {
            Some(op) if op.precedence() >= min_prec => op,
            _ => return Ok(left),
        };
        let loc = parser.current_loc();
        parser.advance();

        let mut right = parser.parse_primary()?;

        // 下一个运算符结合更紧时，先把它归入右操作数
        if let Some(next) = current_binary_op(parser) {
            if op.precedence() < next.precedence() {
                right = parse_binop_rhs(parser, op.precedence() + 1, right)?;
            }
        }

        left = Expr::Binary(BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
            loc,
        });
    }
}

/// 解析基本表达式
pub fn parse_primary(parser: &mut Parser) -> TallyResult<Expr> {
    match parser.current_token() {
        Token::Identifier(name) => {
            let name = name.clone();
            parser.advance();
            Ok(Expr::Variable(name))
        }
        Token::Number(value) => {
            let value = *value;
            parser.advance();
            Ok(Expr::Number(value))
        }
        Token::LParen => parse_paren_expression(parser),
        Token::Return => parser.parse_return_statement(),
        other => {
            let message = format!("Unexpected token when expecting an expression: {}", other);
            Err(parser.error(&message))
        }
    }
}

/// 解析括号表达式
fn parse_paren_expression(parser: &mut Parser) -> TallyResult<Expr> {
    parser.consume(&Token::LParen, "Expected '('")?;
    let expr = parser.parse_expression()?;
    parser.consume(&Token::RParen, "Expected ')' after expression")?;
    Ok(expr)
}
