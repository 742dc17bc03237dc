use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tally::Compiler;
use tally::cli::{init_logging, read_source};
use tally::codegen::IRGenerator;
use tally::error::TallyError;
use tally::lexer;
use tracing::info;

const FRAME: &str = "==================";

/// 将一个 Tally 函数定义编译为 LLVM IR
#[derive(Parser, Debug)]
#[command(name = "tallyc", version, about, long_about = None)]
struct Cli {
    /// Source file; standard input is read when omitted or `-`
    input: Option<PathBuf>,

    /// Write the IR to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(long, help = "Print the token stream to stderr")]
    dump_tokens: bool,

    #[arg(long, help = "Print the parsed function to stderr")]
    dump_ast: bool,

    #[arg(long, help = "Surround the IR with status lines and delimiters")]
    frame: bool,

    #[arg(long, help = "Print 'Enter code:' before reading standard input")]
    prompt: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.frame && matches!(err.downcast_ref::<TallyError>(), Some(TallyError::Parser { .. })) {
                eprintln!("Error parsing function.");
            }
            eprintln!("error: {err:#}");
            ExitCode::from(err.downcast_ref::<TallyError>().map_or(3, TallyError::exit_code))
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let source = read_source(cli.input.as_deref(), cli.prompt)?;

    if cli.dump_tokens {
        for (i, t) in lexer::lex(&source).iter().enumerate() {
            eprintln!("  {}: {} at {}", i, t.token, t.loc);
        }
    }

    let function = Compiler::new().check(&source)?;
    info!(name = %function.name, params = function.params.len(), "parsed function");
    if cli.frame {
        println!("Parsed a function successfully!");
    }
    if cli.dump_ast {
        eprintln!("{}", function);
    }

    if cli.frame {
        println!("Generating LLVM IR...");
    }
    let ir = IRGenerator::new().generate(&function)?;

    match &cli.output {
        Some(path) => {
            write_output(path, &ir)?;
            info!(path = %path.display(), bytes = ir.len(), "wrote IR");
        }
        None if cli.frame => {
            println!("Generated LLVM IR:");
            println!("{FRAME}");
            print!("{ir}");
            println!("{FRAME}");
        }
        None => print!("{ir}"),
    }

    Ok(())
}

fn write_output(path: &Path, ir: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    fs::write(path, ir).with_context(|| format!("failed to write output file {}", path.display()))?;
    Ok(())
}
