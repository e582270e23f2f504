//! # tiercart
//!
//! Line-oriented adapter around `tiercart-core`.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          tiercart run                                   │
//! │                                                                         │
//! │  1. Parse arguments (clap)                                             │
//! │  2. Load config: defaults → TOML file → TIERCART_* env → flags         │
//! │  3. Initialise tracing (stderr)                                        │
//! │  4. Read N, then N "<orderIndex> <price>" lines                        │
//! │  5. cart.add() once per line                                           │
//! │  6. engine.compute_total(), item_counts()                              │
//! │  7. Write report to stdout                                             │
//! │                                                                         │
//! │  Any error → message on stderr, exit code from CliError::exit_code()   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod config;
mod error;
mod input;
mod logging;
mod report;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use clap::Parser;
use tiercart_core::{CartStore, PricingEngine};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(cli.verbose, cli.quiet, config.log_level.as_deref())?;

    let format = cli.format.unwrap_or(config.format);
    info!(%format, config = ?cli.config, "Configuration loaded");

    let engine = PricingEngine::new(config.pricing.bracket_table()?);
    debug!(rules = engine.brackets().rules().len(), "Bracket table ready");

    let items = match &cli.input {
        Some(path) => {
            info!(?path, "Reading orders from file");
            input::read_orders(BufReader::new(File::open(path)?))?
        }
        None => input::read_orders(io::stdin().lock())?,
    };

    let mut cart = CartStore::new();
    for item in &items {
        cart.add(item);
    }
    info!(lines = items.len(), distinct = cart.len(), "Cart assembled");

    let summary = engine.compute_total(&cart)?;
    let counts = engine.item_counts(&cart);
    let rendered = report::render(format, &summary, &counts)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
