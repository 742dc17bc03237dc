use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tally::Compiler;
use tally::cli::{init_logging, read_source};
use tally::error::TallyError;

/// 检查一个 Tally 函数定义的语法，不生成 IR
#[derive(Parser, Debug)]
#[command(name = "tally-check", version, about, long_about = None)]
struct Cli {
    /// Source file; standard input is read when omitted or `-`
    input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match check(cli.input.as_deref()) {
        Ok(summary) => {
            println!("ok: {summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(err.downcast_ref::<TallyError>().map_or(3, TallyError::exit_code))
        }
    }
}

fn check(input: Option<&Path>) -> Result<String> {
    let source = read_source(input, false)?;
    let function = Compiler::new().check(&source)?;
    Ok(format!("{}({})", function.name, function.params.join(", ")))
}
