// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use tracing::error;

use crate::blockchain::client::{DEFAULT_API_KEY, DEFAULT_API_URL, DEFAULT_TIMEOUT};

// `Clone` is required because Axum's `with_state` method needs the state to be clonable.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub etherscan_api_key: String,
    pub etherscan_api_url: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: parse_or(&lookup, "PORT", 3000)?,
            etherscan_api_key: lookup("ETHERSCAN_API_KEY")
                .unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            etherscan_api_url: lookup("ETHERSCAN_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            request_timeout_secs: parse_or(
                &lookup,
                "ETHERSCAN_TIMEOUT_SECS",
                DEFAULT_TIMEOUT.as_secs(),
            )?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .inspect_err(|e| error!("Invalid {} environment variable '{}': {}", key, raw, e))
            .with_context(|| format!("{} must be a valid number", key)),
    }
}
