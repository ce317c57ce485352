//! Job chain statistics.
//!
//! Usage:
//!   job-chains [INPUT] [--output PATH] [--format yaml|json] [-v...]

use clap::Parser;
use job_chains::{ChainResult, ReportFormat, run_with_format};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "job-chains",
    version,
    about = "Summarize job chains from job_id,job_id_next,runtime_secs records"
)]
struct Cli {
    /// Input file; `-` or omitted reads standard input
    input: Option<PathBuf>,
    /// Write the report here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Yaml)]
    format: ReportFormat,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn execute(cli: &Cli) -> ChainResult<()> {
    let report = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => run_with_format(File::open(path)?, cli.format)?,
        _ => run_with_format(io::stdin().lock(), cli.format)?,
    };

    // Nothing is written until the report is complete.
    match &cli.output {
        Some(path) => fs::write(path, report)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
