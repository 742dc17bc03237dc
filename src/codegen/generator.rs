//! Tally LLVM IR 代码生成器主模块
//!
//! 本模块将单个函数的 AST 转换为 LLVM IR 文本。

use tracing::debug;

use crate::codegen::context::IRGenerator;
use crate::codegen::types::DOUBLE;
use crate::ast::*;
use crate::error::TallyResult;

impl IRGenerator {
    /// 主入口：生成函数的 LLVM IR
    pub fn generate(&mut self, function: &Function) -> TallyResult<String> {
        self.reset();
        self.current_function = function.name.clone();

        self.emit_function_header(function);

        self.indent = 1;
        self.emit_parameter_slots(&function.params);
        self.generate_block(&function.body)?;

        // 函数体没有 return 时补一个默认返回值
        if !self.has_return {
            self.emit_line(&format!("ret {} 0.0", DOUBLE));
        }
        self.indent = 0;

        if !self.output.ends_with('\n') {
            self.output.push('\n');
        }
        self.emit_raw("}");

        debug!(function = %function.name, temps = self.temp_counter, "generated IR");
        Ok(self.output.clone())
    }

    fn emit_function_header(&mut self, function: &Function) {
        let params = function
            .params
            .iter()
            .map(|p| format!("{} %{}", DOUBLE, p))
            .collect::<Vec<_>>()
            .join(", ");
        self.emit_raw(&format!("define {} @{}({}) {{", DOUBLE, function.name, params));
        self.emit_raw("entry:");
    }

    /// 每个参数分配一个栈槽并存入传入的值
    fn emit_parameter_slots(&mut self, params: &[String]) {
        for param in params {
            self.emit_line(&format!("%{}.addr = alloca {}", param, DOUBLE));
            self.emit_line(&format!("store {} %{}, {}* %{}.addr", DOUBLE, param, DOUBLE, param));
        }
    }
}
