//! 函数定义解析

use crate::ast::Function;
use crate::error::{parser_error, TallyResult};
use crate::lexer::Token;
use super::Parser;

/// 解析函数定义: func IDENT '(' params? ')' '{' block '}'
pub fn parse_function(parser: &mut Parser) -> TallyResult<Function> {
    let loc = parser.current_loc();

    parser.consume(&Token::Func, "Expected 'func'")?;
    let name = parser.consume_identifier("Expected function name")?;

    parser.consume(&Token::LParen, "Expected '(' after function name")?;
    let params = parser.parse_parameters()?;
    parser.consume(&Token::RParen, "Expected ')' after parameters")?;

    parser.consume(&Token::LBrace, "Expected '{' before function body")?;
    let body = parser.parse_block()?;
    parser.consume(&Token::RBrace, "Expected '}' after function body")?;

    Ok(Function {
        name,
        params,
        body,
        loc,
    })
}

/// 解析参数列表，允许末尾多一个逗号
pub fn parse_parameters(parser: &mut Parser) -> TallyResult<Vec<String>> {
    let mut params: Vec<String> = Vec::new();

    if parser.check(&Token::RParen) {
        return Ok(params);
    }

    loop {
        let loc = parser.current_loc();
        let name = parser.consume_identifier("Expected identifier in parameter list")?;
        if params.contains(&name) {
            return Err(parser_error(
                loc.line,
                loc.column,
                format!("Duplicate parameter '{}'", name),
            ));
        }
        params.push(name);

        if !parser.match_token(&Token::Comma) || parser.check(&Token::RParen) {
            break;
        }
    }

    Ok(params)
}
