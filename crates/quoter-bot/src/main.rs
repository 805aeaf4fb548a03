//! Quoter bot - replay entry point.
//!
//! Reads one JSON `TradingState` per line, runs the step and writes the
//! resulting `StepOutput` as one JSON line on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use quoter_bot::{replay, AppConfig, Trader};
use quoter_telemetry::Metrics;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use tracing::{debug, info};

/// Per-step market maker, replayed over recorded trading states
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via QUOTER_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// JSON-lines file of trading states ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    quoter_telemetry::init_logging()?;

    info!("Starting quoter bot v{}", env!("CARGO_PKG_VERSION"));

    // CLI arg > QUOTER_CONFIG env var > default
    let config = match &args.config {
        Some(path) => {
            info!(config_path = %path, "Loading configuration");
            AppConfig::from_file(path)?
        }
        None => AppConfig::load()?,
    };

    let mut trader = Trader::from_config(&config)?;
    info!(
        instruments = config.instruments.len(),
        max_log_length = config.telemetry.max_log_length,
        "Configuration loaded"
    );

    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open input {}", args.input))?;
        Box::new(BufReader::new(file))
    };

    let stdout = io::stdout();
    let steps = replay(&mut trader, reader, BufWriter::new(stdout.lock()))?;

    info!(steps, "Replay complete");
    debug!(metrics = %Metrics::render()?, "Final metrics");

    Ok(())
}
