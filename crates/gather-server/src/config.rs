//! Configuration for the server binary.
//!
//! All configuration is loaded from environment variables; every value
//! has a default suitable for local development.

use crate::error::ServiceError;

/// Complete service configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Host address to bind to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Per-topic change-channel capacity (drop-oldest ring size).
    pub channel_capacity: usize,
    /// Whether to install the sample graph at startup.
    pub seed: bool,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `GATHER_HOST` -- bind address (default `0.0.0.0`)
    /// - `GATHER_PORT` -- TCP port (default `8080`)
    /// - `GATHER_CHANNEL_CAPACITY` -- per-topic buffer size (default `256`)
    /// - `GATHER_SEED` -- install sample data, `true`/`false` (default `true`)
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ServiceError> {
        Ok(Self {
            host: std::env::var("GATHER_HOST").unwrap_or_else(|_| String::from("0.0.0.0")),
            port: parse_var("GATHER_PORT", 8080)?,
            channel_capacity: parse_var("GATHER_CHANNEL_CAPACITY", 256)?,
            seed: parse_var("GATHER_SEED", true)?,
        })
    }
}

/// Parse an optional environment variable, falling back to a default
/// when the variable is unset.
fn parse_var<T: core::str::FromStr>(name: &str, default: T) -> Result<T, ServiceError> {
    match std::env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

/// Parse a raw string into the target type, naming the variable in the
/// error when it fails.
fn parse_value<T: core::str::FromStr>(name: &str, raw: &str) -> Result<T, ServiceError> {
    raw.parse()
        .map_err(|_| ServiceError::Config(format!("invalid {name}: {raw}")))
}
