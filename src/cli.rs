//! 命令行工具共用的日志初始化与源码读取

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::Level;

/// `-v` 的次数对应的日志级别
pub fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// 日志写到 stderr，stdout 只留给 IR
pub fn init_logging(verbose: u8) {
    // 重复初始化时保留已有的订阅者
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(io::stderr)
        .try_init();
}

/// 读取源码：给出路径（且不是 `-`）时读文件，否则读标准输入
pub fn read_source(input: Option<&Path>, prompt: bool) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        _ => {
            if prompt {
                println!("Enter code:");
                io::stdout().flush()?;
            }
            read_all(io::stdin().lock()).context("failed to read standard input")
        }
    }
}

fn read_all(mut reader: impl Read) -> io::Result<String> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(3), Level::TRACE);
        assert_eq!(log_level(9), Level::TRACE);
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(0);
        init_logging(2);
    }

    #[test]
    fn test_read_source_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.tally");
        fs::write(&path, "func f() { }").unwrap();
        assert_eq!(read_source(Some(&path), false).unwrap(), "func f() { }");
    }

    #[test]
    fn test_read_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.tally");
        let err = read_source(Some(&path), false).unwrap_err();
        assert!(err.to_string().starts_with("failed to read input file"));
    }

    #[test]
    fn test_read_all() {
        let source = read_all("func f(a) { return a; }".as_bytes()).unwrap();
        assert_eq!(source, "func f(a) { return a; }");
    }
}
