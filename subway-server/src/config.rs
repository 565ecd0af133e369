//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Environment variable holding the bind address.
pub const HOST_VAR: &str = "SUBWAY_HOST";
/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "SUBWAY_PORT";
/// Environment variable holding the fallback log filter.
pub const LOG_VAR: &str = "SUBWAY_LOG";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: IpAddr,

    /// Port to bind to. Zero picks a free port.
    pub port: u16,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl ServerConfig {
    /// Read overrides from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = value.parse().map_err(|e: std::net::AddrParseError| ConfigError {
                var: HOST_VAR,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(value) = lookup(PORT_VAR) {
            config.port = value.parse().map_err(|e: std::num::ParseIntError| ConfigError {
                var: PORT_VAR,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(value) = lookup(LOG_VAR) {
            config.log_filter = value;
        }

        Ok(config)
    }

    /// The socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            log_filter: "info".to_string(),
        }
    }
}
