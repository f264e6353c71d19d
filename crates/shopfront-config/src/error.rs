//! # Config Error Types

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading/saving failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be written.
    #[error("Failed to write config {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax error, unknown value, or an invalid delivery table.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Semantically invalid setting.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Neither an explicit path nor a platform config directory is available.
    #[error("No config path available")]
    NoConfigPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::Read {
            path: PathBuf::from("/etc/shopfront/pricing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read config /etc/shopfront/pricing.toml: denied"
        );

        let err = ConfigError::Invalid("store name must not be empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: store name must not be empty"
        );
    }
}
