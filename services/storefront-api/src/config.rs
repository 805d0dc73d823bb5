//! Configuration for the storefront API service.

use std::path::PathBuf;

/// Storefront API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Directory holding the seeded JSON fixtures
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        Ok(Self {
            http_port,
            data_dir,
        })
    }

    /// Path to the brands fixture
    pub fn brands_path(&self) -> PathBuf {
        self.data_dir.join("brands.json")
    }

    /// Path to the products fixture
    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    /// Path to the users fixture
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
