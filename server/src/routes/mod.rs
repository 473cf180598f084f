//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the backend proxy endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. The browser talks only
//! to this host; `/api/v1/*` and `/health` are relayed to the REST backend.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Backend proxy routes plus the host's own liveness probe.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/{*path}", any(proxy::forward))
        .route("/health", get(proxy::forward))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Proxy routes + Leptos SSR pages + `/pkg` static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (malformed
/// `[[workspace.metadata.leptos]]` section or `LEPTOS_*` variables).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS produced by the Leptos build.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let assets = Router::new()
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new());

    Ok(api_routes(state)
        .merge(leptos_router)
        .merge(assets)
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
