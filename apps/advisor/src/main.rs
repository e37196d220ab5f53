//! # SmartShop Advisor
//!
//! Command-line front-end for the purchase planner.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse command line (clap)                                           │
//! │  2. Load AdvisorConfig (file → SMARTSHOP_* env → defaults) under a      │
//! │     bootstrap subscriber (RUST_LOG, else warnings) on stderr            │
//! │  3. Initialize tracing (RUST_LOG, else [logging].level) on stderr       │
//! │  4. Dispatch subcommand → rendered output on stdout                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod args;
mod catalog;
mod commands;
mod config;
mod error;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Commands};
use crate::config::AdvisorConfig;
use crate::error::AdvisorResult;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.clone()).context("Failed to load configuration")?;
    init_tracing(&config.logging.level);
    debug!(?config, "Configuration loaded");

    let output = match &args.command {
        Commands::Plan(plan) => commands::run_plan(plan, &config).context("Plan search failed")?,
        Commands::Prices(prices) => {
            commands::run_prices(prices).context("Price preview failed")?
        }
        Commands::Buy(buy) => commands::run_buy(buy, &config).context("Purchase failed")?,
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Loads the config with a temporary subscriber installed, so warnings about
/// rejected overrides are shown before the configured level is known.
fn load_config(path: Option<PathBuf>) -> AdvisorResult<AdvisorConfig> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let bootstrap = bootstrap_subscriber(filter, std::io::stderr);
    tracing::subscriber::with_default(bootstrap, || AdvisorConfig::load(path))
}

fn bootstrap_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=smartshop_core=trace` - Show trace for the core only
/// - Default: `[logging].level` from the config (`info`)
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
