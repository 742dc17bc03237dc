//! Tally LLVM IR 代码生成器
//!
//! 本模块将 Tally AST 转换为 LLVM IR 代码。

pub mod context;
mod types;
mod expressions;
mod statements;
mod generator;

// 公开 IRGenerator 作为代码生成器的入口
pub use context::IRGenerator;
