//! # Shopfront Quote
//!
//! Command-line front end for the checkout pricing engine.
//!
//! ## Usage
//! ```bash
//! # Price a cart (JSON PricingRequest) with the default delivery option
//! shopfront-quote quote --cart cart.json
//!
//! # Pick "Tomorrow" and validate the input first
//! cat cart.json | shopfront-quote quote --delivery 0 --validate
//!
//! # Show the delivery table with arrival dates
//! shopfront-quote options
//!
//! # Write pricing.toml with the stock delivery table
//! shopfront-quote init-config --config ./pricing.toml
//! ```
//!
//! Results go to stdout as JSON; logs go to stderr.

mod cli;
mod commands;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use shopfront_config::ShopConfig;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        // Does not load the config, so a broken file can be replaced
        Commands::InitConfig(args) => {
            init_logging(cli.log.as_deref(), "info");
            commands::run_init_config(cli.config.clone(), args, std::io::stdout().lock())
        }
        Commands::Quote(args) => {
            let config = load_config(&cli)?;
            commands::run_quote(
                &config.calculator(),
                args,
                std::io::stdin().lock(),
                std::io::stdout().lock(),
            )
        }
        Commands::Options => {
            let config = load_config(&cli)?;
            commands::run_options(&config, Utc::now(), std::io::stdout().lock())
        }
    }
}

/// Loads the shop config, installs logging with its filter, then reports
/// the load through the new subscriber.
fn load_config(cli: &Cli) -> Result<ShopConfig> {
    let env = |key: &str| std::env::var(key).ok();
    let source = ShopConfig::locate(cli.config.clone(), env);
    let config = ShopConfig::load_from(&source, env)?;

    init_logging(cli.log.as_deref(), &config.logging.filter);
    config.log_loaded(&source);

    Ok(config)
}

/// Installs the stderr subscriber.
///
/// Precedence: `--log`, then `RUST_LOG`, then the configured filter.
fn init_logging(explicit: Option<&str>, configured: &str) {
    let filter = match explicit {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
