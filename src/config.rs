use std::env;
use std::path::Path;
use std::time::Duration;

use eyre::{eyre, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_URL_VAR: &str = "PRODUCTS_API_URL";
pub const TIMEOUT_VAR: &str = "PRODUCTS_API_TIMEOUT_SECS";

/// Loads variables from `env_file`, or from `.env` in the working directory.
/// A missing file is not an error.
pub fn load_env_file(env_file: Option<&Path>) {
    if let Some(path) = env_file {
        dotenvy::from_path(path).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Where and how to reach the products service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the service, without trailing slash.
    pub api_url: String,
    /// Timeout for a whole request.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source, `from_env` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = sanitize_base_url(&lookup(API_URL_VAR).unwrap_or_default());
        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| eyre!("Invalid {TIMEOUT_VAR}: {raw:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout),
        })
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
