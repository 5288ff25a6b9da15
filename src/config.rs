//! The single source of truth for all rowcast runtime configuration.
//!
//! This module defines the unified `RowcastConfig` struct, which is created once
//! at the application boundary (the server binary reads it from the process
//! environment) and then passed down to the serving layer. The conversion
//! pipeline itself is configuration-free.

use serde::{Deserialize, Serialize};

use crate::error::RowcastError;

/// The unified configuration for the rowcast serving layer.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "snake_case")]
pub struct RowcastConfig {
    /// The address the server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The listen port. The `PORT` environment variable overrides this, which
    /// is the convention under hosted function dispatchers.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on the accepted request body, in bytes. Encoded Arrow
    /// payloads are ~4/3 the size of the stream they carry.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for RowcastConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl RowcastConfig {
    /// Builds a configuration from the process environment, starting from the
    /// defaults. Recognized variables: `ROWCAST_HOST`, `PORT`,
    /// `ROWCAST_MAX_BODY_BYTES`.
    pub fn from_env() -> Result<Self, RowcastError> {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("ROWCAST_HOST") {
            config.host = host;
        }
        if let Ok(raw) = std::env::var("PORT") {
            config.port = parse_port(&raw)?;
        }
        if let Ok(raw) = std::env::var("ROWCAST_MAX_BODY_BYTES") {
            config.max_body_bytes = parse_body_limit(&raw)?;
        }
        Ok(config)
    }

    /// The `host:port` string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, RowcastError> {
    raw.parse()
        .map_err(|_| RowcastError::Config(format!("PORT must be a number in 1-65535, got '{raw}'")))
}

fn parse_body_limit(raw: &str) -> Result<usize, RowcastError> {
    raw.parse().map_err(|_| {
        RowcastError::Config(format!("ROWCAST_MAX_BODY_BYTES must be a byte count, got '{raw}'"))
    })
}

/// Helper for `serde` to default the bind host.
fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Helper for `serde` to default the listen port.
fn default_port() -> u16 {
    8080
}

/// Helper for `serde` to default the body cap. (32 MiB)
fn default_max_body_bytes() -> usize {
    32 * 1024 * 1024
}
