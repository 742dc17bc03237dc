//! 类型与常量格式
//!
//! 所有值都是 `double`；比较结果是 `i1`，随即转换回 `double`。

pub const DOUBLE: &str = "double";
pub const BOOL: &str = "i1";

/// 浮点常量保留六位小数，例如 `3` 输出为 `3.000000`。
/// 无穷大和 NaN 没有十进制写法，使用 LLVM 的十六进制位模式。
pub fn format_double(value: f64) -> String {
    if value.is_finite() {
        format!("{:.6}", value)
    } else {
        format!("0x{:016X}", value.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(3.0), "3.000000");
        assert_eq!(format_double(0.5), "0.500000");
        assert_eq!(format_double(2.25), "2.250000");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_double(f64::INFINITY), "0x7FF0000000000000");
        assert_eq!(format_double(f64::NEG_INFINITY), "0xFFF0000000000000");
    }
}
