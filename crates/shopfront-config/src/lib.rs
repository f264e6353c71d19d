//! # shopfront-config: Configuration for Shopfront
//!
//! Loads the delivery table once at startup and hands out a ready
//! [`PricingCalculator`](shopfront_core::PricingCalculator).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shopfront_config::ShopConfig;
//!
//! let config = ShopConfig::load(None)?;
//! let calculator = config.calculator();
//! # Ok::<(), shopfront_config::ConfigError>(())
//! ```

pub mod config;
pub mod error;

pub use config::{ConfigSource, LogSettings, ShopConfig, StoreSettings};
pub use error::{ConfigError, ConfigResult};
