//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for all upstream calls and the backend base
//! URL. Nothing in it is mutable after startup.

use std::sync::Arc;
use std::time::Duration;

/// Shared application state. Clone is required by Axum; both fields are
/// cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL without a trailing `/`.
    pub backend_url: Arc<str>,
}

impl AppState {
    pub fn new(http: reqwest::Client, backend_url: impl Into<Arc<str>>) -> Self {
        Self { http, backend_url: backend_url.into() }
    }
}

/// Upstream client with a per-request timeout.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(Duration::from_secs(timeout_secs)).build()
}
