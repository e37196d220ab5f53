use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Purchase advisor for the SmartShop storefront.
///
/// Recommends which products to buy, in which order, to collect the most
/// points from a coin budget while prices rise with every purchase.
#[derive(Debug, Parser)]
#[command(version, about, name = "advisor")]
pub struct Args {
    /// Path to the TOML config file. Defaults to advisor.toml in the
    /// platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Recommend the purchase plan with the most points
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Preview how a product's price rises over repeated purchases
    Prices(PricesArgs),
    /// Apply one purchase to a catalog snapshot and print the receipt
    Buy(BuyArgs),
}

#[derive(Debug, ClapArgs)]
pub struct PlanArgs {
    /// JSON catalog file; the seed catalog is used when omitted
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Coins available to spend
    #[arg(long)]
    pub coins: Option<f64>,

    /// Number of purchases to look ahead
    #[arg(long)]
    pub steps: Option<usize>,

    /// Stop after visiting this many decision-tree nodes
    #[arg(long)]
    pub max_nodes: Option<u64>,

    /// Stop after this many milliseconds
    #[arg(long)]
    pub time_budget_ms: Option<u64>,

    /// Explore first purchases in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, ClapArgs)]
pub struct PricesArgs {
    /// Product id or name
    #[arg(long)]
    pub product: String,

    /// Number of purchases to preview
    #[arg(long, default_value_t = 5)]
    pub purchases: usize,

    /// JSON catalog file; the seed catalog is used when omitted
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, ClapArgs)]
pub struct BuyArgs {
    /// Product id or name
    #[arg(long)]
    pub product: String,

    /// Coins in the buyer's wallet
    #[arg(long)]
    pub coins: Option<f64>,

    /// JSON catalog file; the seed catalog is used when omitted
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
