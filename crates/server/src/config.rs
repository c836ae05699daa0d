//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BOUTIQUE_JWT_SECRET` - Session token signing secret (min 32 chars)
//! - `BOUTIQUE_ADMIN_SECRET` - Shared administrative secret (min 32 chars)
//!
//! ## Optional
//! - `BOUTIQUE_HOST` - Bind address (default: 127.0.0.1)
//! - `BOUTIQUE_PORT` - Listen port (default: 5000)
//! - `BOUTIQUE_DATA_FILE` - Path of the JSON data file (default: data.json)
//! - `BOUTIQUE_ADMIN_MOBILES` - Comma-separated mobile numbers that register
//!   as admins

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_SECRET_LENGTH: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path of the JSON document file
    pub data_file: PathBuf,
    /// Session token signing secret
    pub jwt_secret: SecretString,
    /// Shared administrative secret
    pub admin_secret: SecretString,
    /// Mobile numbers granted the admin flag on registration
    pub admin_mobiles: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail the minimum-length check.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("BOUTIQUE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BOUTIQUE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("BOUTIQUE_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BOUTIQUE_PORT".to_string(), e.to_string()))?;
        let data_file = PathBuf::from(get_env_or_default("BOUTIQUE_DATA_FILE", "data.json"));

        let jwt_secret = get_required_secret("BOUTIQUE_JWT_SECRET")?;
        validate_secret(&jwt_secret, "BOUTIQUE_JWT_SECRET")?;
        let admin_secret = get_required_secret("BOUTIQUE_ADMIN_SECRET")?;
        validate_secret(&admin_secret, "BOUTIQUE_ADMIN_SECRET")?;

        let admin_mobiles = parse_admin_mobiles(&get_env_or_default("BOUTIQUE_ADMIN_MOBILES", ""));

        Ok(Self {
            host,
            port,
            data_file,
            jwt_secret,
            admin_secret,
            admin_mobiles,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a secret meets minimum length requirements.
fn validate_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Parse the comma-separated admin mobile allow-list.
fn parse_admin_mobiles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
