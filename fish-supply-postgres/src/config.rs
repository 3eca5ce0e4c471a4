//! Database connection settings.
//!
//! Settings come from the process environment, after loading a `.env` file if
//! one is present. `DATABASE_URL` wins when set; otherwise the connection is
//! assembled from the individual `DB_*` variables.

use fish_supply_api::{ApiError, ApiResult};
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: Option<String>,
        database: String,
    },
}

impl fmt::Debug for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionTarget::Url(_) => f.write_str("Url(<redacted>)"),
            ConnectionTarget::Parts {
                host,
                port,
                user,
                database,
                ..
            } => f
                .debug_struct("Parts")
                .field("host", host)
                .field("port", port)
                .field("user", user)
                .field("database", database)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub target: ConnectionTarget,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Read the configuration from the environment (and `.env`).
    pub fn from_env() -> ApiResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let target = match value("DATABASE_URL") {
            Some(url) => ConnectionTarget::Url(url),
            None => {
                let required = |key: &str| {
                    value(key).ok_or_else(|| {
                        ApiError::ConfigurationError(format!(
                            "{key} must be set when DATABASE_URL is absent"
                        ))
                    })
                };
                ConnectionTarget::Parts {
                    host: required("DB_HOST")?,
                    port: parse_or("DB_PORT", value("DB_PORT"), DEFAULT_PORT)?,
                    user: required("DB_USER")?,
                    password: value("DB_PASSWORD"),
                    database: required("DB_NAME")?,
                }
            }
        };

        Ok(Self {
            target,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                value("DB_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            acquire_timeout: Duration::from_secs(parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                value("DB_ACQUIRE_TIMEOUT_SECS"),
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?),
        })
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            target: ConnectionTarget::Url(url.into()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    pub fn connect_options(&self) -> ApiResult<PgConnectOptions> {
        match &self.target {
            ConnectionTarget::Url(url) => PgConnectOptions::from_str(url)
                .map_err(|e| ApiError::ConfigurationError(format!("Invalid DATABASE_URL: {e}"))),
            ConnectionTarget::Parts {
                host,
                port,
                user,
                password,
                database,
            } => {
                let options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(database);
                Ok(match password {
                    Some(password) => options.password(password),
                    None => options,
                })
            }
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> ApiResult<T> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ApiError::ConfigurationError(format!("{key} has an invalid value '{raw}'"))),
        None => Ok(default),
    }
}
