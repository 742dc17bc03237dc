//! 表达式代码生成
use tracing::error;

use crate::codegen::context::IRGenerator;
use crate::codegen::types::{format_double, BOOL, DOUBLE};
use crate::ast::*;
use crate::error::{TallyResult, codegen_error};

impl IRGenerator {
    /// 生成表达式代码，返回保存结果的寄存器
    ///
    /// 已经发出 `ret` 后不再生成任何指令，直接返回最近的寄存器。
    pub fn generate_expression(&mut self, expr: &Expr) -> TallyResult<String> {
        if self.has_return {
            return Ok(self.last_temp());
        }
        match expr {
            Expr::Number(value) => Ok(self.generate_number(*value)),
            Expr::Variable(name) => Ok(self.generate_variable(name)),
            Expr::Binary(bin) => self.generate_binary_expression(bin),
            Expr::Return(ret) => self.generate_return(ret),
            Expr::Block(block) => {
                self.generate_block(block)?;
                Ok(self.last_temp())
            }
        }
    }

    /// 常量通过 `fadd 0.0` 装入寄存器
    fn generate_number(&mut self, value: f64) -> String {
        let temp = self.new_temp();
        self.emit_line(&format!("{} = fadd {} 0.0, {}", temp, DOUBLE, format_double(value)));
        temp
    }

    /// 从参数的栈槽读取
    fn generate_variable(&mut self, name: &str) -> String {
        let temp = self.new_temp();
        self.emit_line(&format!("{} = load {}, {}* %{}.addr", temp, DOUBLE, DOUBLE, name));
        temp
    }

    /// 生成二元表达式代码
    fn generate_binary_expression(&mut self, bin: &BinaryExpr) -> TallyResult<String> {
        let left = self.generate_expression(&bin.left)?;
        let right = self.generate_expression(&bin.right)?;
        // 操作数里的 return 已经结束了函数体
        if self.has_return {
            return Ok(left);
        }

        let instruction = match bin.op {
            BinaryOp::Add => "fadd",
            BinaryOp::Sub => "fsub",
            BinaryOp::Mul => "fmul",
            BinaryOp::Div => "fdiv",
            BinaryOp::Lt => return Ok(self.generate_less_than(&left, &right)),
            BinaryOp::Unsupported(op) => {
                error!(function = %self.current_function, operator = %op, loc = %bin.loc, "unknown binary operator");
                return Err(codegen_error(format!(
                    "Unknown binary operator '{}' at {} in function '{}'",
                    op, bin.loc, self.current_function
                )));
            }
        };

        let temp = self.new_temp();
        self.emit_line(&format!("{} = {} {} {}, {}", temp, instruction, DOUBLE, left, right));
        Ok(temp)
    }

    /// `<` 先比较得到 i1，再转换为 0.0 / 1.0
    fn generate_less_than(&mut self, left: &str, right: &str) -> String {
        let cmp = self.new_temp();
        self.emit_line(&format!("{} = fcmp olt {} {}, {}", cmp, DOUBLE, left, right));
        let temp = self.new_temp();
        self.emit_line(&format!("{} = uitofp {} {} to {}", temp, BOOL, cmp, DOUBLE));
        temp
    }
}
