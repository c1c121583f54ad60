//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Gateway server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Directory where the node persists its state.
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `GATEWAY_ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `NODE_DATA_DIR` | Node storage directory | `./data` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("GATEWAY_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let data_dir = env::var("NODE_DATA_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        Ok(Self { addr, data_dir })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid GATEWAY_ADDR format")]
    InvalidAddr,
}
