//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CATALOG_BASE_URL` - Remote product catalog root
//!   (default: `https://dummyjson.com`)
//! - `BOZOR_DATA_DIR` - Directory for the durable key-value store
//!   (default: `data`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Catalog root used when `CATALOG_BASE_URL` is unset.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://dummyjson.com";

/// Data directory used when `BOZOR_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Root URL of the remote product catalog
    pub catalog_base_url: Url,
    /// Directory holding the persisted collections
    pub data_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_base_url =
            parse_base_url(&get_env_or_default("CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL))?;
        let data_dir = PathBuf::from(get_env_or_default("BOZOR_DATA_DIR", DEFAULT_DATA_DIR));

        Ok(Self {
            catalog_base_url,
            data_dir,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_BASE_URL".to_string(), e.to_string()))?;
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            "CATALOG_BASE_URL".to_string(),
            format!("URL has no host: {raw}"),
        ));
    }
    Ok(url)
}
