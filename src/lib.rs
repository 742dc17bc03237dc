pub mod error;
pub mod ast;
pub mod lexer;
pub mod parser;
pub mod codegen;
pub mod cli;

use std::fs;
use std::path::Path;

use tracing::debug;

use ast::Function;
use error::{TallyError, TallyResult};

pub struct Compiler;

impl Compiler {
    pub fn new() -> Self {
        Self
    }

    /// 只做词法和语法分析
    pub fn check(&self, source: &str) -> TallyResult<Function> {
        // 1. 词法分析
        let tokens = lexer::lex(source);
        debug!(count = tokens.len(), "lexed tokens");

        // 2. 语法分析
        parser::parse(tokens)
    }

    /// 编译一个函数定义，返回 LLVM IR 文本
    pub fn compile(&self, source: &str) -> TallyResult<String> {
        let function = self.check(source)?;

        // 3. 代码生成
        let mut ir_gen = codegen::IRGenerator::new();
        ir_gen.generate(&function)
    }

    pub fn compile_to_file(&self, source: &str, output_path: impl AsRef<Path>) -> TallyResult<()> {
        let ir = self.compile(source)?;
        fs::write(output_path.as_ref(), ir)
            .map_err(|e| TallyError::Io(e.to_string()))?;
        Ok(())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
