//! Configuration error module.
//!
//! This module defines error types that may occur during configuration
//! loading, parsing, and validation operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when reading or parsing the configuration file.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Error when validating the configuration.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Other configuration errors.
    #[error("Configuration error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/etc/makai.toml"));
        assert_eq!(
            err.to_string(),
            "Configuration file not found: /etc/makai.toml"
        );

        let err = ConfigError::ValidationError("max_path_bytes must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "Configuration validation error: max_path_bytes must be greater than 0"
        );
    }
}
