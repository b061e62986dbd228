//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;

/// Bind address used when `ROUTE_SERVER_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Bind address did not parse
    #[error("ROUTE_SERVER_ADDR must be a socket address like 127.0.0.1:3000, got {0:?}")]
    InvalidAddr(String),

    /// A numeric setting did not parse
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Catalog JSON file. The bundled seed is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let addr = match get("ROUTE_SERVER_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(raw.clone()))?,
            None => default_addr(),
        };

        let defaults = CacheConfig::default();
        let ttl_secs = parse_number(
            "ROUTE_SERVER_CACHE_TTL_SECS",
            get("ROUTE_SERVER_CACHE_TTL_SECS"),
            defaults.ttl.as_secs(),
        )?;
        let max_capacity = parse_number(
            "ROUTE_SERVER_CACHE_CAPACITY",
            get("ROUTE_SERVER_CACHE_CAPACITY"),
            defaults.max_capacity,
        )?;

        Ok(Self {
            addr,
            catalog_path: get("ROUTE_SERVER_CATALOG").map(PathBuf::from),
            cache: CacheConfig {
                ttl: Duration::from_secs(ttl_secs),
                max_capacity,
            },
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            catalog_path: None,
            cache: CacheConfig::default(),
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn parse_number(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
