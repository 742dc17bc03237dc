use std::fmt;

use crate::error::SourceLocation;
use crate::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub params: Vec<String>,
    pub body: Block,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Expr>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Binary(BinaryExpr),
    Return(ReturnExpr),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: BinaryOp,
    pub right: Box<Expr>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnExpr {
    pub value: Box<Expr>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    /// 代码生成器没有对应指令的运算符，解析器不会产生
    Unsupported(char),
}

impl BinaryOp {
    /// 令牌对应的二元运算符
    pub fn from_token(token: &Token) -> Option<BinaryOp> {
        match token {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            Token::Star => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            Token::Lt => Some(BinaryOp::Lt),
            _ => None,
        }
    }

    /// 运算符优先级，数值越大结合越紧
    pub fn precedence(self) -> i32 {
        match self {
            BinaryOp::Lt => 10,
            BinaryOp::Add | BinaryOp::Sub => 20,
            BinaryOp::Mul | BinaryOp::Div => 40,
            BinaryOp::Unsupported(_) => -1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Lt => '<',
            BinaryOp::Unsupported(c) => c,
        }
    }
}

impl Expr {
    pub fn is_return(&self) -> bool {
        matches!(self, Expr::Return(_))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Binary(bin) => write!(f, "({} {} {})", bin.left, bin.op.symbol(), bin.right),
            Expr::Return(ret) => write!(f, "return {}", ret.value),
            Expr::Block(block) => write!(f, "{}", block),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }
        writeln!(f, "{{")?;
        for stmt in &self.statements {
            writeln!(f, "    {};", stmt)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func {}({}) {}", self.name, self.params.join(", "), self.body)
    }
}
