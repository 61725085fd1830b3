//! CLI entry point: argument parsing, logging setup, one conversion run.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Convert a todo.txt file into an Org-mode outline.
#[derive(Parser, Debug)]
#[command(name = "todorg", version, about)]
struct Args {
    /// Path to the todo.txt input file
    input: PathBuf,

    /// Path of the .org file to write (existing content is replaced)
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todorg=info")),
        )
        .init();

    let args = Args::parse();

    match todorg::convert_file(&args.input, &args.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
