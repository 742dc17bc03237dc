use thiserror::Error;
use std::fmt;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TallyError {
    #[error("Parser error at line {line}, column {column}: {message}")]
    Parser { line: usize, column: usize, message: String },

    #[error("Code generation error: {0}")]
    CodeGen(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl TallyError {
    /// 命令行驱动程序使用的退出码
    pub fn exit_code(&self) -> u8 {
        match self {
            TallyError::Parser { .. } => 1,
            TallyError::CodeGen(_) => 2,
            TallyError::Io(_) => 3,
        }
    }
}

pub type TallyResult<T> = Result<T, TallyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

pub fn parser_error(line: usize, column: usize, message: impl Into<String>) -> TallyError {
    TallyError::Parser {
        line,
        column,
        message: message.into(),
    }
}

pub fn codegen_error(message: impl Into<String>) -> TallyError {
    TallyError::CodeGen(message.into())
}
