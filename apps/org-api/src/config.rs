//! Environment-based configuration with fail-fast validation.
//!
//! Required values abort startup with a clear message; the process never
//! runs with a missing or weak signing secret.

use std::env;

use thiserror::Error;

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
const DEFAULT_PORT: u16 = 8080;

/// Default token lifetime in seconds (30 minutes).
const DEFAULT_TOKEN_TTL_SECS: i64 = 1800;

/// Minimum length of the token signing secret, in bytes.
const MIN_SECRET_BYTES: usize = 32;

/// Configuration errors reported at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// An environment variable has an unusable value.
    #[error("invalid value for {variable}: {reason}")]
    Invalid {
        variable: &'static str,
        reason: String,
    },
}

/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `8080`).
    pub port: u16,
    /// Token signing secret (`TOKEN_SECRET`, required, >= 32 bytes). Never
    /// derived from request data.
    pub token_secret: String,
    /// Default token lifetime in seconds (`TOKEN_TTL_SECS`, default 1800).
    pub token_ttl_secs: i64,
    /// Log filter directive (`RUST_LOG`, default `info`).
    pub rust_log: String,
}

impl Config {
    /// Load configuration from the environment, failing on the first
    /// missing or invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                variable: "PORT",
                reason: format!("'{raw}' is not a valid port"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let token_secret =
            env::var("TOKEN_SECRET").map_err(|_| ConfigError::Missing("TOKEN_SECRET"))?;
        if token_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::Invalid {
                variable: "TOKEN_SECRET",
                reason: format!("must be at least {MIN_SECRET_BYTES} bytes"),
            });
        }

        let token_ttl_secs = match env::var("TOKEN_TTL_SECS") {
            Ok(raw) => {
                let ttl: i64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    variable: "TOKEN_TTL_SECS",
                    reason: format!("'{raw}' is not a number"),
                })?;
                if ttl <= 0 {
                    return Err(ConfigError::Invalid {
                        variable: "TOKEN_TTL_SECS",
                        reason: "must be positive".to_string(),
                    });
                }
                ttl
            }
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            host,
            port,
            token_secret,
            token_ttl_secs,
            rust_log,
        })
    }

    /// The address to bind the listener to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
