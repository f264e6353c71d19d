//! # Shop Configuration
//!
//! Loads the delivery table and runtime settings.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     SHOPFRONT_LOG=debug                                                 │
//! │     SHOPFRONT_STORE_NAME="Main Street Store"                            │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     --config <path>, else $SHOPFRONT_CONFIG, else                       │
//! │     ~/.config/shopfront/pricing.toml (Linux)                            │
//! │     ~/Library/Application Support/com.shopfront.shopfront/pricing.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     Stock delivery table: Tomorrow / Next 3 Days / Next 5 Days          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Shopfront"
//!
//! [logging]
//! filter = "info"
//!
//! [[deliveryOptions]]
//! name = "Tomorrow"
//! daysToDeliver = 1
//! shippingPrice = "12.90"
//! freeShippingMinPrice = "0.00"
//!
//! [[deliveryOptions]]
//! name = "Next 5 Days"
//! daysToDeliver = 5
//! shippingPrice = "4.90"
//! freeShippingMinPrice = "35.00"
//! ```
//!
//! The delivery table is validated while parsing: an empty list, a blank
//! name, a lead time over a year or a negative price fails the load.
//!
//! ## Loading Before Logging
//! The log filter lives in this file, so the subscriber cannot exist while
//! the file is read. Callers split the load:
//! ```rust,no_run
//! use shopfront_config::ShopConfig;
//!
//! let env = |key: &str| std::env::var(key).ok();
//! let source = ShopConfig::locate(None, env);
//! let config = ShopConfig::load_from(&source, env)?;
//! // ... install the subscriber with config.logging.filter ...
//! config.log_loaded(&source);
//! # Ok::<(), shopfront_config::ConfigError>(())
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shopfront_core::{DeliveryOptions, PricingCalculator};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "SHOPFRONT_CONFIG";

/// Environment variable overriding the log filter.
pub const LOG_FILTER_ENV: &str = "SHOPFRONT_LOG";

/// Environment variable overriding the store name.
pub const STORE_NAME_ENV: &str = "SHOPFRONT_STORE_NAME";

const CONFIG_FILE_NAME: &str = "pricing.toml";

// =============================================================================
// Sections
// =============================================================================

/// Store identity, shown in CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Shopfront".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or
    /// `"shopfront_config=debug,info"`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Config Source
// =============================================================================

/// Where [`ShopConfig::locate`] resolved the config file to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// An existing file, parsed on load.
    File(PathBuf),
    /// The resolved path does not exist; defaults apply.
    Missing(PathBuf),
    /// No platform config directory; defaults apply.
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Missing(path) => write!(f, "defaults ({} not found)", path.display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete shop configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub logging: LogSettings,

    /// Ordered delivery table. The last entry is the default selection.
    ///
    /// camelCase like the option fields it holds.
    #[serde(default, rename = "deliveryOptions", alias = "delivery_options")]
    pub delivery_options: DeliveryOptions,
}

impl ShopConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (a missing file is not an error)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with<F>(config_path: Option<PathBuf>, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = Self::locate(config_path, &env);
        Self::load_from(&source, env)
    }

    /// Resolves the config file: `config_path`, else `$SHOPFRONT_CONFIG`,
    /// else the platform config directory.
    pub fn locate<F>(config_path: Option<PathBuf>, env: F) -> ConfigSource
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = config_path
            .or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        match path {
            Some(path) if path.exists() => ConfigSource::File(path),
            Some(path) => ConfigSource::Missing(path),
            None => ConfigSource::Defaults,
        }
    }

    /// Reads `source`, applies environment overrides and validates.
    ///
    /// Emits no events; see [`log_loaded`](Self::log_loaded).
    pub fn load_from<F>(source: &ConfigSource, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match source {
            ConfigSource::File(path) => Self::from_file(path)?,
            ConfigSource::Missing(_) | ConfigSource::Defaults => Self::default(),
        };

        config.apply_env_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Reports where the configuration came from and what it holds.
    ///
    /// Call once the subscriber is installed.
    pub fn log_loaded(&self, source: &ConfigSource) {
        match source {
            ConfigSource::File(path) => {
                info!(path = %path.display(), "Loaded shop config from file")
            }
            ConfigSource::Missing(path) => {
                debug!(path = %path.display(), "Config file not found, using defaults")
            }
            ConfigSource::Defaults => debug!("No config directory available, using defaults"),
        }

        info!(
            store = %self.store.name,
            log_filter = %self.logging.filter,
            delivery_options = self.delivery_options.len(),
            default_delivery = self.delivery_options.default_index(),
            "Shop configuration loaded"
        );
    }

    /// Reads and parses one TOML file, without environment overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file, creating parent directories.
    ///
    /// Returns the path written.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "Shop config saved");
        Ok(path)
    }

    /// Validates settings not already enforced while parsing.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::Invalid("store name must not be empty".into()));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log filter must not be empty".into()));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = env(LOG_FILTER_ENV) {
            self.logging.filter = filter;
        }

        if let Some(name) = env(STORE_NAME_ENV) {
            self.store.name = name;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopfront", "shopfront")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Builds the calculator over the configured delivery table.
    pub fn calculator(&self) -> PricingCalculator {
        PricingCalculator::new(self.delivery_options.clone())
    }
}
