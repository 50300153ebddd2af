/*
cargo run --release --bin fastp_output_parser -- results/fastp

cargo run --release --bin fastp_output_parser -- \
    results/fastp \
    --log-dir logs \
    --verbose
*/

use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{CommandFactory, Parser};
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use fastp_summary::OUTPUT_FILE_NAME;

/// Convert a directory of fastp JSON reports into fastp_reports.csv (tab-separated),
/// one row of filtering stats per report.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory that contains the fastp *.json reports
    directory: Option<PathBuf>,

    /// Write a timestamped log file here instead of logging to stderr
    #[arg(long, value_name = "PATH")]
    log_dir: Option<PathBuf>,

    /// Log every report as it is read
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // no directory: show usage, nothing else
    let Some(directory) = cli.directory.as_deref() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    init_logging(cli.log_dir.as_deref(), cli.verbose)?;
    info!("Started - directory: {:?}", directory);

    let (written, rows) = fastp_summary::run(directory, Path::new(OUTPUT_FILE_NAME))
        .with_context(|| format!("summarising reports in {}", directory.display()))?;

    println!("Wrote {} report(s) -> {}", rows, written.display());
    Ok(())
}

fn init_logging(log_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    match log_dir {
        Some(dir) => {
            create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;
            let ts = Local::now().format("%Y%m%d_%H%M%S");
            let log_path = dir.join(format!("fastp_output_parser_{ts}.log"));
            let file = File::create(&log_path)
                .with_context(|| format!("creating log file {}", log_path.display()))?;
            WriteLogger::init(level, LogConfig::default(), file)?;
        }
        None => WriteLogger::init(level, LogConfig::default(), std::io::stderr())?,
    }
    Ok(())
}
