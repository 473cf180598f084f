//! Forwarding of `/api/v1/*` and `/health` to the REST backend.
//!
//! DESIGN
//! ======
//! The proxy is transparent: method, path, query string, body and the
//! `Content-Type`/`Authorization`/`Accept` headers are passed through, and
//! the upstream status, `Content-Type` and body come back unchanged. Only a
//! transport failure is turned into a response of our own (502).

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Upstream URL for a request path and optional query string.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match query {
        Some(q) if !q.is_empty() => format!("{base}{path}?{q}"),
        _ => format!("{base}{path}"),
    }
}

/// Request headers copied to the upstream call.
fn forwarded_headers() -> [HeaderName; 3] {
    [header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let target = upstream_url(&state.backend_url, uri.path(), uri.query());
    let url = reqwest::Url::parse(&target).map_err(|_| ProxyError::InvalidUrl(target.clone()))?;

    let mut request = state.http.request(method.clone(), url);
    for name in forwarded_headers() {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(%method, path = uri.path(), error = %e, "backend request failed");
            return Err(ProxyError::Upstream(e));
        }
    };

    let status = upstream.status();
    tracing::debug!(%method, path = uri.path(), status = status.as_u16(), "proxied");

    let mut response_headers = HeaderMap::new();
    if let Some(content_type) = upstream.headers().get(header::CONTENT_TYPE) {
        response_headers.insert(header::CONTENT_TYPE, content_type.clone());
    }
    let bytes = upstream.bytes().await?;

    Ok((status, response_headers, bytes).into_response())
}
