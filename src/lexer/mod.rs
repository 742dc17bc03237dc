//! Tally 词法分析器
//!
//! 词法分析器从不失败：无法归类的字符会作为 `Token::Char` 原样返回。

use std::collections::VecDeque;
use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::SourceLocation;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\f\x0B]+")]
#[logos(skip r"#[^\r\n]*")]
pub enum Token {
    // 关键字
    #[token("func")]
    Func,
    #[token("return")]
    Return,
    // 保留关键字，当前语法不使用
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,

    // 标识符
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // 数字：数字与至多一个小数点，单独的 "." 按 0.0 处理
    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]*", |lex| lex.slice().parse::<f64>().unwrap_or(0.0))]
    Number(f64),

    // 运算符
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,

    // 分隔符
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // 换行（用于跟踪行号）- 支持 \r\n、\n 和单独的 \r
    #[regex(r"\r\n|\n|\r")]
    Newline,

    /// 其他任意单个字符
    Char(char),

    /// 输入结束
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Func => write!(f, "'func'"),
            Token::Return => write!(f, "'return'"),
            Token::If => write!(f, "'if'"),
            Token::Else => write!(f, "'else'"),
            Token::While => write!(f, "'while'"),
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::Number(value) => write!(f, "number {}", value),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Lt => write!(f, "'<'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::Comma => write!(f, "','"),
            Token::Semicolon => write!(f, "';'"),
            Token::Newline => write!(f, "newline"),
            Token::Char(c) => write!(f, "'{}'", c),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithLocation {
    pub token: Token,
    pub loc: SourceLocation,
}

pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, Token>,
    line: usize,
    /// 列号缓存：`column_offset` 处字符的列号，随令牌单调前移
    column_offset: usize,
    column: usize,
    /// 已切分但尚未返回的单字符令牌
    pending: VecDeque<TokenWithLocation>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            line: 1,
            column_offset: 0,
            column: 1,
            pending: VecDeque::new(),
        }
    }

    /// 返回下一个令牌。到达输入末尾后每次调用都返回 `Token::Eof`。
    pub fn next_token(&mut self) -> TokenWithLocation {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }

            match self.inner.next() {
                Some(Ok(Token::Newline)) => {
                    self.line += 1;
                    self.column_offset = self.inner.span().end;
                    self.column = 1;
                }
                Some(Ok(token)) => {
                    let loc = self.location_at(self.inner.span().start);
                    trace!(%token, %loc, "token");
                    return TokenWithLocation { token, loc };
                }
                Some(Err(())) => self.queue_unmatched(),
                None => {
                    return TokenWithLocation {
                        token: Token::Eof,
                        loc: self.location_at(self.source.len()),
                    };
                }
            }
        }
    }

    /// 读取全部令牌，以唯一的 `Token::Eof` 结尾
    pub fn tokenize(&mut self) -> Vec<TokenWithLocation> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.token == Token::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// 把未被任何模式匹配的输入逐字符转成 `Token::Char`
    fn queue_unmatched(&mut self) {
        let span = self.inner.span();
        let mut end = span.end.max(span.start + 1);
        while !self.source.is_char_boundary(end) {
            end += 1;
        }
        if end > span.end {
            self.inner.bump(end - span.end);
        }

        for (offset, c) in self.source[span.start..end].char_indices() {
            let loc = self.location_at(span.start + offset);
            self.pending.push_back(TokenWithLocation {
                token: Token::Char(c),
                loc,
            });
        }
    }

    /// 偏移量只增不减，只需统计上一个位置之后的字符
    fn location_at(&mut self, offset: usize) -> SourceLocation {
        self.column += self.source[self.column_offset..offset].chars().count();
        self.column_offset = offset;
        SourceLocation {
            line: self.line,
            column: self.column,
        }
    }
}

pub fn lex(source: &str) -> Vec<TokenWithLocation> {
    let mut lexer = Lexer::new(source);
    lexer.tokenize()
}
