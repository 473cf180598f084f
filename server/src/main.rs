#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let http = state::build_http_client(config.backend_timeout_secs)?;
    let state = state::AppState::new(http, config.backend_url.as_str());

    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, backend = %config.backend_url, "parts-ui listening");
    axum::serve(listener, app).await?;
    Ok(())
}
