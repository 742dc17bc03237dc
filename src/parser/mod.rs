//! Tally 语法分析器
//!
//! 本模块将词法分析器生成的令牌流解析为抽象语法树 (AST)。
//! 语法完全可预测：只看当前令牌，不回溯，遇到第一个错误即中止。

mod functions;
mod statements;
mod expressions;
mod utils;

use tracing::debug;

use crate::ast::{Block, Expr, Function};
use crate::error::{SourceLocation, TallyError, TallyResult};
use crate::lexer::{Token, TokenWithLocation};

/// 语法分析器
pub struct Parser {
    /// 令牌流，总以 `Token::Eof` 结尾
    pub tokens: Vec<TokenWithLocation>,
    /// 当前解析位置
    pub pos: usize,
}

impl Parser {
    /// 创建新的语法分析器
    pub fn new(mut tokens: Vec<TokenWithLocation>) -> Self {
        if tokens.last().map_or(true, |t| t.token != Token::Eof) {
            let loc = tokens
                .last()
                .map(|t| t.loc)
                .unwrap_or(SourceLocation { line: 1, column: 1 });
            tokens.push(TokenWithLocation { token: Token::Eof, loc });
        }
        Self { tokens, pos: 0 }
    }

    /// 解析一个函数定义；其后的令牌被忽略
    pub fn parse_function(&mut self) -> TallyResult<Function> {
        let function = functions::parse_function(self)?;
        debug!(name = %function.name, params = function.params.len(), "parsed function");
        Ok(function)
    }

    fn parse_parameters(&mut self) -> TallyResult<Vec<String>> {
        functions::parse_parameters(self)
    }

    // 语句解析方法
    fn parse_block(&mut self) -> TallyResult<Block> {
        statements::parse_block(self)
    }

    fn parse_return_statement(&mut self) -> TallyResult<Expr> {
        statements::parse_return_statement(self)
    }

    // 表达式解析方法
    fn parse_expression(&mut self) -> TallyResult<Expr> {
        expressions::parse_expression(self)
    }

    fn parse_primary(&mut self) -> TallyResult<Expr> {
        expressions::parse_primary(self)
    }

    // 辅助方法
    fn is_at_end(&self) -> bool {
        utils::is_at_end(self)
    }

    fn current_token(&self) -> &Token {
        utils::current_token(self)
    }

    fn current_loc(&self) -> SourceLocation {
        utils::current_loc(self)
    }

    fn advance(&mut self) -> &Token {
        utils::advance(self)
    }

    fn check(&self, token: &Token) -> bool {
        utils::check(self, token)
    }

    fn match_token(&mut self, token: &Token) -> bool {
        utils::match_token(self, token)
    }

    fn consume(&mut self, token: &Token, message: &str) -> TallyResult<&Token> {
        utils::consume(self, token, message)
    }

    fn consume_identifier(&mut self, message: &str) -> TallyResult<String> {
        utils::consume_identifier(self, message)
    }

    fn error(&self, message: &str) -> TallyError {
        utils::error(self, message)
    }
}

/// 解析令牌流生成 AST
pub fn parse(tokens: Vec<TokenWithLocation>) -> TallyResult<Function> {
    let mut parser = Parser::new(tokens);
    parser.parse_function()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, ReturnExpr};
    use crate::lexer::lex;

    fn parse_source(source: &str) -> TallyResult<Function> {
        parse(lex(source))
    }

    fn returned(function: &Function) -> &Expr {
        match function.body.statements.last() {
            Some(Expr::Return(ReturnExpr { value, .. })) => &**value,
            other => panic!("expected trailing return, got {:?}", other),
        }
    }

    fn parser_message(err: TallyError) -> String {
        match err {
            TallyError::Parser { message, .. } => message,
            other => panic!("expected parser error, got {:?}", other),
        }
    }

    #[test]
    fn test_function_signature() {
        let function = parse_source("func add(a, b) { return a + b; }").unwrap();
        assert_eq!(function.name, "add");
        assert_eq!(function.params, vec!["a", "b"]);
        assert_eq!(function.body.statements.len(), 1);
    }

    #[test]
    fn test_empty_body() {
        let function = parse_source("func f() { }").unwrap();
        assert!(function.params.is_empty());
        assert!(function.body.statements.is_empty());
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let function = parse_source("func f() { return 1 + 2 * 3; }").unwrap();
        assert_eq!(returned(&function).to_string(), "(1 + (2 * 3))");
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let function = parse_source("func f() { return 1 - 2 - 3; }").unwrap();
        assert_eq!(returned(&function).to_string(), "((1 - 2) - 3)");
    }

    #[test]
    fn test_comparison_binds_loosest() {
        let function = parse_source("func f(a, b) { return a * 2 < b + 1 / a; }").unwrap();
        assert_eq!(returned(&function).to_string(), "((a * 2) < (b + (1 / a)))");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let function = parse_source("func f(x) { return (x + 1) * (x - 1); }").unwrap();
        match returned(&function) {
            Expr::Binary(bin) => assert_eq!(bin.op, BinaryOp::Mul),
            other => panic!("expected binary expression, got {:?}", other),
        }
        assert_eq!(returned(&function).to_string(), "((x + 1) * (x - 1))");
    }

    #[test]
    fn test_return_semicolon_is_optional() {
        let function = parse_source("func f(x) { return x }").unwrap();
        assert_eq!(returned(&function), &Expr::Variable("x".to_string()));
    }

    #[test]
    fn test_statements_after_return_are_dropped() {
        let function = parse_source("func f() { return 1; return 2; }").unwrap();
        assert_eq!(function.body.statements.len(), 1);
        assert_eq!(returned(&function), &Expr::Number(1.0));

        // 不可达部分只做括号匹配，不做语法检查
        let function = parse_source("func f() { return 1; ) % { 2 3 } ; }").unwrap();
        assert_eq!(function.body.statements.len(), 1);

        let function = parse_source("func f() { 1; return 1; }").unwrap();
        assert_eq!(function.body.statements.len(), 2);
        assert_eq!(returned(&function), &Expr::Number(1.0));
    }

    #[test]
    fn test_expression_statement_requires_semicolon() {
        let err = parse_source("func f(a) { a + 1 }").unwrap_err();
        assert_eq!(parser_message(err), "Expected ';' after expression");

        let function = parse_source("func f(a) { a + 1; }").unwrap();
        assert_eq!(function.body.statements.len(), 1);
        assert!(!function.body.statements[0].is_return());
    }

    #[test]
    fn test_trailing_comma_in_parameters() {
        let function = parse_source("func f(a, b,) { }").unwrap();
        assert_eq!(function.params, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_parameter() {
        let err = parse_source("func f(a, a) { }").unwrap_err();
        assert_eq!(parser_message(err), "Duplicate parameter 'a'");
    }

    #[test]
    fn test_missing_tokens() {
        let cases = [
            ("f() { }", "Expected 'func'"),
            ("func () { }", "Expected function name"),
            ("func f { }", "Expected '(' after function name"),
            ("func f(1) { }", "Expected identifier in parameter list"),
            ("func f(a b) { }", "Expected ')' after parameters"),
            ("func f() return 1;", "Expected '{' before function body"),
            ("func f() { return (1 + 2; }", "Expected ')' after expression"),
        ];
        for (source, expected) in cases {
            let err = parse_source(source).unwrap_err();
            assert_eq!(parser_message(err), expected, "source: {}", source);
        }
    }

    #[test]
    fn test_unclosed_body() {
        let err = parse_source("func f() { 1;").unwrap_err();
        assert_eq!(parser_message(err), "Expected '}' after function body");
    }

    #[test]
    fn test_unexpected_primary() {
        let err = parse_source("func f() { return ; }").unwrap_err();
        assert_eq!(
            parser_message(err),
            "Unexpected token when expecting an expression: ';'"
        );
    }

    #[test]
    fn test_unknown_operator_is_not_consumed() {
        // '%' 不在优先级表中：表达式在 'a' 处结束，随后缺少 ';'
        let err = parse_source("func f(a) { a % 2; }").unwrap_err();
        assert_eq!(parser_message(err), "Expected ';' after expression");
    }

    #[test]
    fn test_error_location() {
        let err = parse_source("func f() {\n  a + 1\n}").unwrap_err();
        assert_eq!(
            err,
            TallyError::Parser {
                line: 3,
                column: 1,
                message: "Expected ';' after expression".to_string(),
            }
        );
    }

    #[test]
    fn test_trailing_input_is_ignored() {
        let function = parse_source("func f() { return 1; } func g() { }").unwrap();
        assert_eq!(function.name, "f");
    }
}
