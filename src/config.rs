// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is read from the environment exactly once at startup and
//! carried as an explicit [`AppConfig`] value from then on. Nothing else in
//! the crate reads environment variables.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SECRET_KEY` | Symmetric signing key for access tokens | Required |
//! | `TOKEN_TTL_SECS` | Access-token lifetime in seconds | `7200` (2 hours) |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::env;

use chrono::Duration;
use thiserror::Error;

/// Environment variable name for the token signing key.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

/// Environment variable name for the access-token lifetime.
pub const TOKEN_TTL_ENV: &str = "TOKEN_TTL_SECS";

/// Default access-token lifetime: 2 hours.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 7200;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVariable(&'static str),

    #[error("{name} has an invalid value: {value}")]
    InvalidVariable { name: &'static str, value: String },
}

/// Process-wide configuration, constructed once in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server bind address.
    pub host: String,
    /// Server bind port.
    pub port: u16,
    /// Symmetric signing key for access tokens. Never logged.
    pub secret_key: String,
    /// Access-token lifetime.
    pub token_ttl: Duration,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Fails if `SECRET_KEY` is absent or empty, or if a numeric variable
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = env::var(SECRET_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingVariable(SECRET_KEY_ENV))?;

        let token_ttl_secs = match env::var(TOKEN_TTL_ENV) {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidVariable {
                    name: TOKEN_TTL_ENV,
                    value,
                })?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVariable {
                    name: "PORT",
                    value,
                })?,
            Err(_) => 8080,
        };

        Ok(Self {
            host,
            port,
            secret_key,
            token_ttl: Duration::seconds(token_ttl_secs),
        })
    }
}
