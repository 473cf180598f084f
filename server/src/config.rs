//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BACKEND_URL: {0}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// REST backend base URL without a trailing `/`.
    pub backend_url: String,
    pub backend_timeout_secs: u64,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8001`
    /// - `BACKEND_TIMEOUT_SECS`: default 30; unparseable values fall back
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let raw_url = lookup("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        let backend_url = raw_url.trim().trim_end_matches('/').to_owned();
        if !is_http_url(&backend_url) {
            return Err(ConfigError::InvalidBackendUrl(raw_url));
        }

        let backend_timeout_secs = lookup("BACKEND_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_BACKEND_TIMEOUT_SECS);

        Ok(Self { port, backend_url, backend_timeout_secs })
    }
}

fn is_http_url(raw: &str) -> bool {
    match reqwest::Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
