use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::debug;

use spmx::config::{DEFAULT_EXTENSION, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use spmx::{execute, Operation, RunConfig};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "SPMX - Add, subtract or multiply two sparse matrices stored as text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory the input files are read from
    #[arg(long, global = true, env = "SPMX_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory the result file is written to
    #[arg(long, global = true, env = "SPMX_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Extension of the result file
    #[arg(long, global = true, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Reject input entries outside the declared dimensions
    #[arg(long, global = true)]
    strict_bounds: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Element-wise sum FILE1 + FILE2
    Add(Operands),
    /// Element-wise difference FILE1 - FILE2
    Subtract(Operands),
    /// Matrix product FILE1 x FILE2
    Multiply(Operands),
}

#[derive(Args)]
struct Operands {
    /// Left operand, relative to the input directory
    file1: PathBuf,

    /// Right operand, relative to the input directory
    file2: PathBuf,
}

impl Commands {
    fn into_parts(self) -> (Operation, Operands) {
        match self {
            Commands::Add(operands) => (Operation::Add, operands),
            Commands::Subtract(operands) => (Operation::Subtract, operands),
            Commands::Multiply(operands) => (Operation::Multiply, operands),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    run(cli, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Execute the parsed command, reporting the outcome on `out` / `err`
fn run(cli: Cli, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    let config = RunConfig::new(cli.input_dir, cli.output_dir)
        .with_extension(cli.extension)
        .with_strict_bounds(cli.strict_bounds);
    let (operation, operands) = cli.command.into_parts();

    // Console write errors are ignored
    match execute(operation, &operands.file1, &operands.file2, &config) {
        Ok(output_path) => {
            let _ = writeln!(
                out,
                "{} completed successfully.",
                operation.name().to_uppercase()
            );
            let _ = writeln!(out, "Result written to: {}", output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{operation} failed: {e:?}");
            let _ = writeln!(err, "Error: {e}");
            ExitCode::FAILURE
        }
    }
}
