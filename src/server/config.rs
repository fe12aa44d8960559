/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration
 * from environment variables.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string. Required.
 * - `JWT_SECRET` - Token signing secret. Required; there is no default,
 *   the secret must never live in the source.
 * - `SERVER_PORT` - Listen port, defaults to 3000.
 *
 * # Error Handling
 *
 * Missing required variables fail startup with a `ConfigError`; the
 * server refuses to run without a store or a signing secret.
 */

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    /// `SERVER_PORT` is present but not a valid port number
    #[error("SERVER_PORT is not a valid port: {0}")]
    InvalidPort(String),
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Token signing secret
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` or `JWT_SECRET` is unset,
    /// or if `SERVER_PORT` is set to something that is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}
