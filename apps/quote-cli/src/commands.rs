//! Command handlers.
//!
//! Handlers take their input/output streams as arguments so tests can drive
//! them with in-memory buffers.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use shopfront_config::ShopConfig;
use shopfront_core::validation::{validate_line_items, validate_shipping_address};
use shopfront_core::{PricingCalculator, PricingRequest, PricingResult};
use tracing::{debug, info};

use crate::cli::{InitConfigArgs, QuoteArgs};

/// Reads the request named by `--cart` ("-" = `stdin`).
pub fn read_request(cart: &str, stdin: impl Read) -> Result<PricingRequest> {
    let request: PricingRequest = if cart == "-" {
        serde_json::from_reader(stdin).context("Failed to parse pricing request from stdin")?
    } else {
        let contents = std::fs::read_to_string(cart)
            .with_context(|| format!("Failed to read cart file {cart}"))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse pricing request in {cart}"))?
    };
    Ok(request)
}

/// Prices one request.
pub fn quote(
    calculator: &PricingCalculator,
    mut request: PricingRequest,
    args: &QuoteArgs,
) -> Result<PricingResult> {
    if let Some(index) = args.delivery {
        debug!(index, "Delivery option overridden on the command line");
        request.delivery_index = Some(index);
    }

    if args.validate {
        validate_line_items(&request.items).context("Invalid cart")?;
        if let Some(address) = &request.shipping_address {
            validate_shipping_address(address).context("Invalid shipping address")?;
        }
    }

    let result = calculator.quote(&request)?;

    info!(
        items = request.items.len(),
        delivery = result.selected_delivery_index,
        items_price = %result.items_price,
        total = %result.total_price,
        "Order priced"
    );

    Ok(result)
}

/// `quote` subcommand: read, price, print JSON.
pub fn run_quote(
    calculator: &PricingCalculator,
    args: &QuoteArgs,
    stdin: impl Read,
    mut out: impl Write,
) -> Result<()> {
    let request = read_request(&args.cart, stdin)?;
    let result = quote(calculator, request, args)?;

    if args.compact {
        serde_json::to_writer(&mut out, &result)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &result)?;
    }
    writeln!(out)?;
    Ok(())
}

/// `options` subcommand: one line per delivery option.
pub fn run_options(config: &ShopConfig, now: DateTime<Utc>, mut out: impl Write) -> Result<()> {
    let options = &config.delivery_options;
    writeln!(out, "{} delivery options", config.store.name)?;

    for (index, option) in options.iter().enumerate() {
        let free = if option.free_shipping_min_price.is_positive() {
            format!("free from {}", option.free_shipping_min_price)
        } else {
            "no free shipping".to_string()
        };
        let marker = if index == options.default_index() {
            " (default)"
        } else {
            ""
        };
        let date = match option.expected_delivery(now) {
            Some(date) => date.format("%a, %b %-d").to_string(),
            None => "date unknown".to_string(),
        };

        writeln!(
            out,
            "{index}: {name}{marker} - {price}, {free}, arrives {date}",
            name = option.name,
            price = option.shipping_price,
        )?;
    }

    Ok(())
}

/// `init-config` subcommand.
pub fn run_init_config(
    path: Option<PathBuf>,
    args: &InitConfigArgs,
    mut out: impl Write,
) -> Result<()> {
    let path = match path.or_else(ShopConfig::default_config_path) {
        Some(path) => path,
        None => bail!("No config directory available, pass --config"),
    };

    if path.exists() && !args.force {
        bail!("{} already exists, pass --force to overwrite", path.display());
    }

    let written = ShopConfig::default().save(Some(path))?;
    writeln!(out, "Wrote {}", written.display())?;
    Ok(())
}
