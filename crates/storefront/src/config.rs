//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults match the original demo behavior.
//!
//! - `STOREFRONT_STATUS_VISIBLE_MS` - How long the status banner stays
//!   visible, in milliseconds (default: 3000)

use chrono::Duration;
use thiserror::Error;

const DEFAULT_STATUS_VISIBLE_MS: i64 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// How long a status message stays on the banner.
    pub status_visible: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            status_visible: Duration::milliseconds(DEFAULT_STATUS_VISIBLE_MS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a variable is present but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = get_optional_env("STOREFRONT_STATUS_VISIBLE_MS") {
            config.status_visible = Duration::milliseconds(parse_millis(
                "STOREFRONT_STATUS_VISIBLE_MS",
                &raw,
            )?);
        }

        Ok(config)
    }
}

/// Read an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_millis(key: &str, raw: &str) -> Result<i64, ConfigError> {
    let millis: i64 = raw
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar(key.to_string(), raw.to_string()))?;
    if millis <= 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("{raw} (must be positive)"),
        ));
    }
    Ok(millis)
}
