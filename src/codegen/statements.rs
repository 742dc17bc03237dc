//! 语句代码生成
use crate::codegen::context::IRGenerator;
use crate::codegen::types::DOUBLE;
use crate::ast::*;
use crate::error::TallyResult;

impl IRGenerator {
    /// 生成语句块代码；第一条 return 之后的语句不再生成
    pub fn generate_block(&mut self, block: &Block) -> TallyResult<()> {
        if block.statements.is_empty() {
            self.emit_line(&format!("ret {} 0.0", DOUBLE));
            self.has_return = true;
            return Ok(());
        }

        for stmt in &block.statements {
            self.generate_expression(stmt)?;
            if self.has_return {
                break;
            }
        }
        Ok(())
    }

    /// 生成 return 语句代码
    pub fn generate_return(&mut self, ret: &ReturnExpr) -> TallyResult<String> {
        let value = self.generate_expression(&ret.value)?;
        // 内层 return 已经发出了 ret
        if self.has_return {
            return Ok(value);
        }
        self.emit_line(&format!("ret {} {}", DOUBLE, value));
        self.has_return = true;
        Ok(value)
    }
}
