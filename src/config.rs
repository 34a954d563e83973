//! Process configuration, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` (or `DATABASE_URI`) | required |
//! | `DEBUG` | `false` |
//! | `BIND_ADDR` | `0.0.0.0:8000` |
//! | `REQUEST_TIMEOUT_SECS` | `30` |
//! | `DB_POOL_SIZE` | `8` |

use std::{env, net::SocketAddr, str::FromStr, time::Duration};

use crate::error::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_POOL_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub debug: bool,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
    pub pool_size: usize,
}

impl Config {
    /// Reads the process environment, after merging a `.env` file if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DATABASE_URI"))
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let debug = match lookup("DEBUG") {
            Some(value) => parse_flag("DEBUG", &value)?,
            None => false,
        };

        Ok(Self {
            database_url: strip_scheme(&database_url).to_owned(),
            debug,
            bind_addr: parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?,
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                Some(DEFAULT_REQUEST_TIMEOUT_SECS),
            )?),
            pool_size: parse_or(&lookup, "DB_POOL_SIZE", Some(DEFAULT_POOL_SIZE))?,
        })
    }
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url)
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_owned(),
        }),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { key, value }),
        None => default.ok_or(ConfigError::Missing(key)),
    }
}
