//! Arb Calc — Entry Point
//!
//! Wiring sequence:
//! 1. Parse command-line flags
//! 2. Load optional config file + apply flag overrides
//! 3. Init tracing (stderr, pretty or JSON)
//! 4. Pick the odds source (flags, or interactive prompts)
//! 5. Run the PayoutCalculator
//! 6. Write the report to stdout
//!
//! Any failure prints `error: <reason>` on stderr and exits with status 1.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arb_calc::adapters::console::{FixedSource, PromptSource};
use arb_calc::adapters::report::{write_report, ReportFormat};
use arb_calc::config::{self, LogFormat, LoggingConfig};
use arb_calc::usecases::PayoutCalculator;

/// Split a stake across both sides of a two-way market quoted in American odds.
#[derive(Parser, Debug)]
#[command(name = "arb-calc", version, about, long_about = None)]
struct Cli {
    /// Odds for the favored side, e.g. -150 (skips the prompts)
    #[arg(long, value_name = "ODDS", allow_hyphen_values = true, requires = "underdog")]
    favored: Option<String>,

    /// Odds for the underdog side, e.g. +130 (skips the prompts)
    #[arg(long, value_name = "ODDS", allow_hyphen_values = true, requires = "favored")]
    underdog: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Report format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Log level (overrides the config file; RUST_LOG wins over both)
    #[arg(long, value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // ── 1. Configuration + flag overrides ───────────────────
    let mut config = config::loader::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    // ── 2. Logging to stderr ────────────────────────────────
    init_logging(&config.logging);
    config::loader::log_loaded(cli.config.as_deref(), &config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        format = ?config.output.format,
        interactive = cli.favored.is_none(),
        "Starting arb-calc"
    );

    // ── 3. Compute ──────────────────────────────────────────
    let allocation = match (cli.favored, cli.underdog) {
        (Some(favored), Some(underdog)) => {
            PayoutCalculator::new(FixedSource::new(favored, underdog)).run()?
        }
        _ => {
            // JSON on stdout must stay parseable, so prompts move to stderr.
            let prompts: Box<dyn Write> = match config.output.format {
                ReportFormat::Text => Box::new(io::stdout()),
                ReportFormat::Json => Box::new(io::stderr()),
            };
            PayoutCalculator::new(PromptSource::new(io::stdin().lock(), prompts)).run()?
        }
    };

    // ── 4. Report ───────────────────────────────────────────
    write_report(
        &mut io::stdout().lock(),
        &allocation,
        config.output.format,
        &config.output.currency_symbol,
    )
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
