//! 解析辅助方法

use std::mem;

use crate::error::{parser_error, SourceLocation, TallyError, TallyResult};
use crate::lexer::Token;
use super::Parser;

pub fn is_at_end(parser: &Parser) -> bool {
    matches!(current_token(parser), Token::Eof)
}

pub fn current_token(parser: &Parser) -> &Token {
    let index = parser.pos.min(parser.tokens.len() - 1);
    &parser.tokens[index].token
}

pub fn current_loc(parser: &Parser) -> SourceLocation {
    let index = parser.pos.min(parser.tokens.len() - 1);
    parser.tokens[index].loc
}

/// 前进一个令牌并返回被跳过的令牌；停在 `Eof` 上
pub fn advance(parser: &mut Parser) -> &Token {
    let index = parser.pos.min(parser.tokens.len() - 1);
    if !is_at_end(parser) {
        parser.pos += 1;
    }
    &parser.tokens[index].token
}

/// 只比较令牌种类，不比较携带的值
pub fn check(parser: &Parser, token: &Token) -> bool {
    mem::discriminant(current_token(parser)) == mem::discriminant(token)
}

pub fn match_token(parser: &mut Parser, token: &Token) -> bool {
    if check(parser, token) {
        advance(parser);
        true
    } else {
        false
    }
}

pub fn consume<'a>(parser: &'a mut Parser, token: &Token, message: &str) -> TallyResult<&'a Token> {
    if check(parser, token) {
        Ok(advance(parser))
    } else {
        Err(error(parser, message))
    }
}

pub fn consume_identifier(parser: &mut Parser, message: &str) -> TallyResult<String> {
    if let Token::Identifier(name) = current_token(parser) {
        let name = name.clone();
        advance(parser);
        Ok(name)
    } else {
        Err(error(parser, message))
    }
}

pub fn error(parser: &Parser, message: &str) -> TallyError {
    let loc = current_loc(parser);
    parser_error(loc.line, loc.column, message)
}
