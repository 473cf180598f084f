use super::*;

#[test]
fn invalid_url_maps_to_bad_request() {
    let err = ProxyError::InvalidUrl("http://[::1".into());
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "invalid upstream url: http://[::1");
}

#[tokio::test]
async fn into_response_carries_json_error_body() {
    let response = ProxyError::InvalidUrl("bad".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response.headers().get(axum::http::header::CONTENT_TYPE).cloned();
    assert_eq!(content_type.as_ref().and_then(|v| v.to_str().ok()), Some("application/json"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "invalid upstream url: bad");
}

#[test]
fn config_error_is_transparent_in_startup_error() {
    let err: StartupError = ConfigError::InvalidPort("x".into()).into();
    assert_eq!(err.to_string(), "invalid PORT: x");
}
