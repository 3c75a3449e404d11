//! Routing configuration module.
//!
//! This module defines the limits and the wildcard token the path router
//! operates under. They are the host-facing knobs of the routing core: paths
//! longer than `max_path_bytes` are truncated before matching, at most
//! `max_wildcard_captures` wildcard substitutions are recorded per path, and
//! `wildcard_token` is the reserved segment that matches (and captures) any
//! literal segment.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Routing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Maximum path length in bytes; longer paths are truncated before
    /// tokenization (both at registration and at resolution).
    pub max_path_bytes: usize,

    /// Maximum number of wildcard substitutions recorded per resolved path.
    /// Further wildcard segments still match, but are not recorded.
    pub max_wildcard_captures: usize,

    /// The reserved segment token that matches any literal segment.
    ///
    /// The token is matched exactly like any other segment string: a host
    /// that registers the same literal shadows the wildcard at that level.
    pub wildcard_token: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_path_bytes: 256,
            max_wildcard_captures: 64,
            wildcard_token: "<?>".to_string(),
        }
    }
}

impl Validate for RoutingConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_path_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_path_bytes must be greater than 0".to_string(),
            ));
        }

        if self.max_wildcard_captures == 0 {
            return Err(ConfigError::ValidationError(
                "max_wildcard_captures must be greater than 0".to_string(),
            ));
        }

        if self.wildcard_token.is_empty() {
            return Err(ConfigError::ValidationError(
                "wildcard_token cannot be empty".to_string(),
            ));
        }

        if self.wildcard_token.contains('/') {
            return Err(ConfigError::ValidationError(format!(
                "wildcard_token cannot contain '/': {}",
                self.wildcard_token
            )));
        }

        Ok(())
    }
}
