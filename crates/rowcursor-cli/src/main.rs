//! rowcursor command-line interface
//!
//! Runs one cursor operation over rows loaded from a JSON file.
//!
//! # Usage
//!
//! ```bash
//! # Render all rows as a markup table
//! rowcursor -i rows.json
//!
//! # Extract a single column as JSON
//! rowcursor -i rows.json --op column --column name -o json
//!
//! # Map first column to second column
//! rowcursor -i rows.jsonl --op map
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod formatter;
mod loader;

use commands::Operation;
use config::CliConfig;
use formatter::OutputFormat;

/// rowcursor command-line interface
#[derive(Parser, Debug)]
#[command(
    name = "rowcursor",
    version,
    about = "Run result-cursor extractions over JSON row files",
    long_about = "Loads rows from a JSON array or JSON Lines file and runs one cursor\n\
                  operation over them: column, keyed-column, map, value, table, rows\n\
                  or first."
)]
struct Args {
    /// Row file (JSON array of objects, or one object per line)
    #[arg(short = 'i', long, value_name = "FILE")]
    input: PathBuf,

    /// Operation to run
    #[arg(long, value_enum)]
    op: Option<Operation>,

    /// Column name for the column operation (first column if omitted)
    #[arg(short = 'c', long)]
    column: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum)]
    output: Option<OutputFormat>,

    /// Configuration file path
    #[arg(long, value_name = "FILE", env = "ROWCURSOR_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let config = load_config(&args)?;
    let operation = args.op.unwrap_or(config.operation);
    let format = args.output.unwrap_or(config.format);

    let mut source = loader::load_source(&args.input)?;
    info!("Loaded {}", args.input.display());

    let output = commands::execute(
        &mut source,
        operation,
        args.column.as_deref(),
        &config.table,
    )?;

    let text = formatter::format_output(&output, format)?;
    print!("{}", text);
    if !text.is_empty() && !text.ends_with('\n') {
        println!();
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rowcursor_cli=debug,rowcursor_core=debug")
    } else {
        EnvFilter::new("rowcursor_cli=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load_config(args: &Args) -> Result<CliConfig> {
    match &args.config {
        Some(path) => CliConfig::from_file(path),
        None => Ok(CliConfig::default()),
    }
}
