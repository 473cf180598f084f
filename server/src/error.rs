//! Error types for startup and request proxying.
//!
//! ERROR HANDLING
//! ==============
//! Proxy failures become JSON `{"error": "..."}` responses so the browser
//! client sees an ordinary non-2xx status. Upstream non-2xx statuses are not
//! errors here; they pass through untouched.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Anything that stops the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
