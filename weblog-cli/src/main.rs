//! Weblog Reader CLI Application
//!
//! Command-line front end for the weblog reader library. It:
//! - Loads and sorts a web-server access log
//! - Substitutes simulated data when the log cannot be read
//! - Dumps the sorted entries as text or JSON
//! - Generates simulated log files

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use weblog_reader::{LogfileCreator, LogfileReader};

mod config;
mod report;

use config::{AppConfig, OutputFormat};

/// Weblog Reader - Load, sort and dump web-server access logs
#[derive(Parser, Debug)]
#[command(name = "weblog")]
#[command(about = "Load, sort and dump web-server access logs", long_about = None)]
#[command(version)]
struct Args {
    /// Log file to read (default: weblog.txt)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write COUNT simulated entries to the log file and exit
    #[arg(long, value_name = "COUNT")]
    generate: Option<usize>,

    /// Fail instead of using simulated data when the log cannot be read
    #[arg(long)]
    no_fallback: bool,

    /// Seed for simulated data
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Dump entries as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Weblog Reader CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using reader library v{}", weblog_reader::VERSION);

    let config = resolve_config(&args)?;

    if let Some(count) = args.generate {
        generate_mode(&config, count)
    } else {
        dump_mode(&config)
    }
}

/// Merge the optional config file with command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(file) = &args.file {
        config.reader.source = file.clone();
    }
    if args.no_fallback {
        config.reader.fallback = false;
    }
    if let Some(seed) = args.seed {
        config.reader.seed = Some(seed);
    }
    if args.json {
        config.output.format = OutputFormat::Json;
    }

    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Write a simulated log file
fn generate_mode(config: &AppConfig, count: usize) -> Result<()> {
    let path = &config.reader.source;
    let mut creator = match config.reader.seed {
        Some(seed) => LogfileCreator::with_seed(seed),
        None => LogfileCreator::new(),
    };

    creator
        .create_file(path, count)
        .with_context(|| format!("Failed to write log file: {:?}", path))?;

    log::info!("Wrote {} entries to {:?}", count, path);
    Ok(())
}

/// Load the log (or simulated data) and dump it in sort order
fn dump_mode(config: &AppConfig) -> Result<()> {
    let reader = LogfileReader::open_or_simulate(&config.reader)
        .with_context(|| format!("Failed to load log file: {:?}", config.reader.source))?;

    if reader.is_simulated() {
        log::warn!(
            "{:?} could not be read; showing {} simulated entries",
            config.reader.source,
            reader.len()
        );
    }
    log::info!("Format: {}", reader.format());
    log::info!("Entries: {}", reader.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_entries(&reader, config.output.format, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
