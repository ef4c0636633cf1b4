/**
 * Server Configuration
 *
 * Configuration is read from the environment exactly once at startup and
 * captured in an immutable `ServerConfig`. Handlers and the token layer
 * receive what they need through `AppState` instead of reading the
 * environment themselves.
 *
 * # Variables
 *
 * - `DATABASE_URL` (required) - PostgreSQL connection string
 * - `JWT_SECRET` (required) - symmetric signing secret for session tokens
 * - `SERVER_PORT` (optional, default 3000)
 * - `TOKEN_TTL_SECS` (optional, default 86400) - session token lifetime
 *
 * Missing required variables abort startup; there is no insecure
 * fallback secret.
 */

use thiserror::Error;

/// Default listen port
const DEFAULT_PORT: u16 = 3000;

/// Default session token lifetime: 24 hours
const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("environment variable {0} has an invalid value")]
    Invalid(&'static str),
}

/// Immutable process-wide configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Symmetric secret used to sign and verify session tokens
    pub jwt_secret: String,
    /// TCP port the server listens on
    pub port: u16,
    /// Session token lifetime in seconds
    pub token_ttl_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or an
    /// optional variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("SERVER_PORT"))?,
            None => DEFAULT_PORT,
        };

        let token_ttl_secs = match lookup("TOKEN_TTL_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("TOKEN_TTL_SECS"))?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            token_ttl_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/payvault"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.token_ttl_secs, DEFAULT_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/payvault"),
            ("JWT_SECRET", "secret"),
            ("SERVER_PORT", "8080"),
            ("TOKEN_TTL_SECS", "3600"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.token_ttl_secs, 3600);
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let result = ServerConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost/payvault",
        )]));
        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/payvault"),
            ("JWT_SECRET", "secret"),
            ("SERVER_PORT", "not-a-port"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid("SERVER_PORT"))));
    }
}
