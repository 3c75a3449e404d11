//! Server configuration module.
//!
//! This module defines the host-boundary settings of the embedded server the
//! router serves: the routing core itself performs no I/O, so everything
//! here is data handed to the hosting transport at startup.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name of the server (used in logs)
    pub name: String,

    /// Address the hosting transport binds to
    pub address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "makai-router".to_string(),
            address: "127.0.0.1:8080".parse().expect("static default address"),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
