use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::delete;
use serde_json::{Value, json};

use super::*;
use crate::routes::api_routes;

// =============================================================================
// HARNESS
// =============================================================================

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Echoes what the backend received so tests can assert on forwarding.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> (StatusCode, Json<Value>) {
    let header_text = |name: HeaderName| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    (
        StatusCode::CREATED,
        Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "body": body,
            "content_type": header_text(header::CONTENT_TYPE),
            "authorization": header_text(header::AUTHORIZATION),
        })),
    )
}

fn stub_backend() -> Router {
    Router::new()
        .route("/api/v1/parts/{id}", delete(|| async { StatusCode::NO_CONTENT }))
        .route("/health", axum::routing::get(|| async { Json(json!({ "status": "ok" })) }))
        .fallback(echo)
}

async fn spawn_proxy(backend_url: &str) -> String {
    let state = AppState::new(reqwest::Client::new(), backend_url);
    spawn(api_routes(state)).await
}

// =============================================================================
// UPSTREAM URL
// =============================================================================

#[test]
fn upstream_url_joins_base_and_path() {
    assert_eq!(upstream_url("http://b:8001", "/api/v1/parts/", None), "http://b:8001/api/v1/parts/");
    assert_eq!(upstream_url("http://b:8001/", "/health", None), "http://b:8001/health");
}

#[test]
fn upstream_url_keeps_query() {
    assert_eq!(
        upstream_url("http://b", "/api/v1/search/", Some("q=brake%20pad")),
        "http://b/api/v1/search/?q=brake%20pad"
    );
    assert_eq!(upstream_url("http://b", "/api/v1/parts/", Some("")), "http://b/api/v1/parts/");
}

// =============================================================================
// FORWARDING
// =============================================================================

#[tokio::test]
async fn forwards_method_path_query_body_and_headers() {
    let backend = spawn(stub_backend()).await;
    let proxy = spawn_proxy(&backend).await;

    let response = reqwest::Client::new()
        .post(format!("{proxy}/api/v1/parts/?source=test"))
        .header("Authorization", "Bearer test-token")
        .json(&json!({ "manufacturer_part_number": "UPDATE-001" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let echoed: Value = response.json().await.unwrap();
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "/api/v1/parts/");
    assert_eq!(echoed["query"], "source=test");
    assert_eq!(echoed["authorization"], "Bearer test-token");
    assert_eq!(echoed["content_type"], "application/json");
    let body: Value = serde_json::from_str(echoed["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["manufacturer_part_number"], "UPDATE-001");
}

#[tokio::test]
async fn patch_is_forwarded_as_patch() {
    let backend = spawn(stub_backend()).await;
    let proxy = spawn_proxy(&backend).await;

    let response = reqwest::Client::new()
        .patch(format!("{proxy}/api/v1/vehicles/v-1"))
        .json(&json!({ "make": "Kia" }))
        .send()
        .await
        .unwrap();
    let echoed: Value = response.json().await.unwrap();
    assert_eq!(echoed["method"], "PATCH");
    assert_eq!(echoed["path"], "/api/v1/vehicles/v-1");
    assert_eq!(echoed["query"], Value::Null);
}

#[tokio::test]
async fn upstream_status_passes_through() {
    let backend = spawn(stub_backend()).await;
    let proxy = spawn_proxy(&backend).await;

    let response = reqwest::Client::new()
        .delete(format!("{proxy}/api/v1/parts/p-1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn health_is_forwarded_to_backend() {
    let backend = spawn(stub_backend()).await;
    let proxy = spawn_proxy(&backend).await;

    let response = reqwest::get(format!("{proxy}/health")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn healthz_answers_locally() {
    // Nothing listens on the backend address.
    let proxy = spawn_proxy("http://127.0.0.1:1").await;
    let response = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let proxy = spawn_proxy("http://127.0.0.1:1").await;

    let response = reqwest::get(format!("{proxy}/api/v1/parts/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("backend unreachable"));
}
