//! Process configuration read from environment variables.
//!
//! Store variables are optional: leaving them unset runs the server without
//! a document store. Numeric and boolean variables fall back to defaults
//! when absent and fail loudly when present but unparsable.

use crate::document_store::ports::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_POOL_SIZE, StoreSettings};
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8000;

/// Connection string for the document store.
pub const DATABASE_URL: &str = "DATABASE_URL";
/// Logical database name for the document store.
pub const DATABASE_NAME: &str = "DATABASE_NAME";
/// Listening port.
pub const PORT: &str = "PORT";
/// Maximum number of pooled store connections.
pub const DATABASE_POOL_SIZE: &str = "DATABASE_POOL_SIZE";
/// Seconds to wait for a pooled store connection.
pub const DATABASE_CONNECT_TIMEOUT_SECS: &str = "DATABASE_CONNECT_TIMEOUT_SECS";
/// Emit JSON log lines when true.
pub const LOG_JSON: &str = "LOG_JSON";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Raw value.
        value: String,
        /// Parser message.
        reason: String,
    },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port bound on all interfaces.
    pub port: u16,
    /// Document store settings.
    pub store: StoreSettings,
    /// Whether logs are emitted as JSON.
    pub log_json: bool,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set to a value
    /// that cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = parse_or(read(PORT), PORT, DEFAULT_PORT)?;
        let pool_size = parse_or(read(DATABASE_POOL_SIZE), DATABASE_POOL_SIZE, DEFAULT_POOL_SIZE)?;
        let timeout_secs = parse_or(
            read(DATABASE_CONNECT_TIMEOUT_SECS),
            DATABASE_CONNECT_TIMEOUT_SECS,
            DEFAULT_CONNECT_TIMEOUT.as_secs(),
        )?;
        let log_json = read(LOG_JSON)
            .map(|value| parse_flag(LOG_JSON, &value))
            .transpose()?
            .unwrap_or(false);

        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: DATABASE_POOL_SIZE,
                value: pool_size.to_string(),
                reason: "must be at least 1".to_owned(),
            });
        }

        let url = read(DATABASE_URL);
        let database = read(DATABASE_NAME);
        if url.is_none() {
            info!("{DATABASE_URL} not set, running without a document store");
        }

        Ok(Self {
            port,
            store: StoreSettings {
                url,
                database,
                pool_size,
                connect_timeout: Duration::from_secs(timeout_secs),
            },
            log_json,
        })
    }
}

/// Reads a boolean variable from the process environment, `false` when
/// unset or blank.
///
/// Used to pick the log format before the subscriber exists.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the value is not a boolean.
pub fn flag_from_env(key: &'static str) -> Result<bool, ConfigError> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map_or(Ok(false), |value| parse_flag(key, &value))
}

fn parse_or<T>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(value) = raw else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };
    value.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
        value,
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_owned(),
            reason: "expected a boolean".to_owned(),
        }),
    }
}
