//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shopfront quote - price a checkout from the command line.
#[derive(Parser, Debug)]
#[command(name = "shopfront-quote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to pricing.toml (defaults to $SHOPFRONT_CONFIG or the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, overrides the config file (e.g. "debug")
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the order summary for a cart
    Quote(QuoteArgs),

    /// List the configured delivery options
    Options,

    /// Write the default configuration file
    InitConfig(InitConfigArgs),
}

#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Pricing request JSON file, or "-" for stdin
    #[arg(long, default_value = "-")]
    pub cart: String,

    /// Delivery option index, overrides the request
    #[arg(long)]
    pub delivery: Option<usize>,

    /// Validate items and address before pricing
    #[arg(long)]
    pub validate: bool,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Parser, Debug)]
pub struct InitConfigArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
