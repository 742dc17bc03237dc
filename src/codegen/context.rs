//! IR生成上下文和状态管理

/// IR生成器核心上下文
///
/// 计数器和 return 标志只在一次 `generate` 调用内有效，每次生成前重置。
pub struct IRGenerator {
    pub output: String,
    pub indent: usize,
    pub temp_counter: usize,
    pub has_return: bool,
    pub current_function: String,
}

impl IRGenerator {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
            temp_counter: 0,
            has_return: false,
            current_function: String::new(),
        }
    }

    /// 重置（用于新函数）
    pub fn reset(&mut self) {
        self.output.clear();
        self.indent = 0;
        self.temp_counter = 0;
        self.has_return = false;
        self.current_function.clear();
    }

    /// 发射一行带缩进的指令
    pub fn emit_line(&mut self, line: &str) {
        if !line.is_empty() {
            self.output.push_str(&"  ".repeat(self.indent));
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// 发射代码但不添加缩进（用于函数头、标签）
    pub fn emit_raw(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// 创建新的临时变量
    pub fn new_temp(&mut self) -> String {
        let temp = format!("%t{}", self.temp_counter);
        self.temp_counter += 1;
        temp
    }

    /// 最近分配的临时变量；尚未分配时为常量 0.0
    pub fn last_temp(&self) -> String {
        match self.temp_counter {
            0 => "0.0".to_string(),
            n => format!("%t{}", n - 1),
        }
    }

    /// 已生成的 IR
    pub fn ir(&self) -> &str {
        &self.output
    }
}

impl Default for IRGenerator {
    fn default() -> Self {
        Self::new()
    }
}
