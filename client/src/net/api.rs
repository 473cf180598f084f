//! REST helpers for the parts backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! static bearer credential. Server-side (SSR) and native tests: every call
//! resolves to [`ApiError::Unavailable`] since these endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx statuses both surface as `Err`. Pages drop
//! these without touching state; [`log_failure`] is the single place they are
//! reported (browser console).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Location, LocationPayload, Part, PartPayload, SearchResult, StockLevel, StockUpsert, Vehicle, VehiclePayload,
};

/// Static bearer token embedded at build time (`PARTS_API_TOKEN`).
pub const API_TOKEN: &str = match option_env!("PARTS_API_TOKEN") {
    Some(token) => token,
    None => "test-token",
};

const API_PREFIX: &str = "/api/v1";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

// =============================================================================
// ENDPOINTS
// =============================================================================

pub fn parts_endpoint() -> String {
    format!("{API_PREFIX}/parts/")
}

pub fn part_endpoint(part_id: &str) -> String {
    format!("{API_PREFIX}/parts/{part_id}")
}

pub fn part_vehicles_endpoint(part_id: &str) -> String {
    format!("{API_PREFIX}/parts/{part_id}/vehicles")
}

pub fn part_vehicle_link_endpoint(part_id: &str, vehicle_id: &str) -> String {
    format!("{API_PREFIX}/parts/{part_id}/vehicles/{vehicle_id}")
}

pub fn part_stock_endpoint(part_id: &str) -> String {
    format!("{API_PREFIX}/parts/{part_id}/stock")
}

pub fn vehicles_endpoint() -> String {
    format!("{API_PREFIX}/vehicles/")
}

pub fn vehicle_endpoint(vehicle_id: &str) -> String {
    format!("{API_PREFIX}/vehicles/{vehicle_id}")
}

pub fn locations_endpoint() -> String {
    format!("{API_PREFIX}/locations/")
}

pub fn location_endpoint(location_id: &str) -> String {
    format!("{API_PREFIX}/locations/{location_id}")
}

pub fn search_endpoint(query: &str) -> String {
    format!("{API_PREFIX}/search/?q={}", utf8_percent_encode(query, QUERY_COMPONENT))
}

fn bearer_header() -> String {
    format!("Bearer {API_TOKEN}")
}

/// Report a dropped failure to the browser console.
pub fn log_failure(context: &str, err: &ApiError) {
    #[cfg(feature = "hydrate")]
    {
        log::warn!("{context}: {err}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (context, err);
    }
}

// =============================================================================
// PARTS
// =============================================================================

/// List every part via `GET /api/v1/parts/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that does not decode.
pub async fn list_parts() -> Result<Vec<Part>, ApiError> {
    get_json(&parts_endpoint()).await
}

/// Search parts and vehicles via `GET /api/v1/search/?q=`.
///
/// # Errors
///
/// See [`list_parts`].
pub async fn search(query: &str) -> Result<SearchResult, ApiError> {
    get_json(&search_endpoint(query)).await
}

/// Parts shown on the parts page: the full list for an empty query, else the
/// `parts` half of a search result.
///
/// # Errors
///
/// See [`list_parts`].
pub async fn parts_for_query(query: &str) -> Result<Vec<Part>, ApiError> {
    if query.is_empty() {
        list_parts().await
    } else {
        Ok(search(query).await?.parts)
    }
}

/// # Errors
///
/// See [`list_parts`].
pub async fn get_part(part_id: &str) -> Result<Part, ApiError> {
    get_json(&part_endpoint(part_id)).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn create_part(payload: &PartPayload) -> Result<Part, ApiError> {
    send_json(Verb::Post, &parts_endpoint(), payload).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn update_part(part_id: &str, payload: &PartPayload) -> Result<Part, ApiError> {
    send_json(Verb::Patch, &part_endpoint(part_id), payload).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn delete_part(part_id: &str) -> Result<(), ApiError> {
    send_empty(Verb::Delete, &part_endpoint(part_id)).await
}

/// Vehicles linked to a part.
///
/// # Errors
///
/// See [`list_parts`].
pub async fn list_part_vehicles(part_id: &str) -> Result<Vec<Vehicle>, ApiError> {
    get_json(&part_vehicles_endpoint(part_id)).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn link_vehicle(part_id: &str, vehicle_id: &str) -> Result<(), ApiError> {
    send_empty(Verb::Post, &part_vehicle_link_endpoint(part_id, vehicle_id)).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn unlink_vehicle(part_id: &str, vehicle_id: &str) -> Result<(), ApiError> {
    send_empty(Verb::Delete, &part_vehicle_link_endpoint(part_id, vehicle_id)).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn list_part_stock(part_id: &str) -> Result<Vec<StockLevel>, ApiError> {
    get_json(&part_stock_endpoint(part_id)).await
}

/// Set the quantity of a part at one location (create or replace).
///
/// # Errors
///
/// See [`list_parts`].
pub async fn upsert_stock(part_id: &str, body: &StockUpsert) -> Result<StockLevel, ApiError> {
    send_json(Verb::Post, &part_stock_endpoint(part_id), body).await
}

// =============================================================================
// VEHICLES
// =============================================================================

/// # Errors
///
/// See [`list_parts`].
pub async fn list_vehicles() -> Result<Vec<Vehicle>, ApiError> {
    get_json(&vehicles_endpoint()).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn create_vehicle(payload: &VehiclePayload) -> Result<Vehicle, ApiError> {
    send_json(Verb::Post, &vehicles_endpoint(), payload).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn update_vehicle(vehicle_id: &str, payload: &VehiclePayload) -> Result<Vehicle, ApiError> {
    send_json(Verb::Patch, &vehicle_endpoint(vehicle_id), payload).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn delete_vehicle(vehicle_id: &str) -> Result<(), ApiError> {
    send_empty(Verb::Delete, &vehicle_endpoint(vehicle_id)).await
}

// =============================================================================
// LOCATIONS
// =============================================================================

/// # Errors
///
/// See [`list_parts`].
pub async fn list_locations() -> Result<Vec<Location>, ApiError> {
    get_json(&locations_endpoint()).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn create_location(payload: &LocationPayload) -> Result<Location, ApiError> {
    send_json(Verb::Post, &locations_endpoint(), payload).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn update_location(location_id: &str, payload: &LocationPayload) -> Result<Location, ApiError> {
    send_json(Verb::Patch, &location_endpoint(location_id), payload).await
}

/// # Errors
///
/// See [`list_parts`].
pub async fn delete_location(location_id: &str) -> Result<(), ApiError> {
    send_empty(Verb::Delete, &location_endpoint(location_id)).await
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Post,
    Patch,
    Delete,
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .header("Authorization", &bearer_header())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, bearer_header());
        Err(ApiError::Unavailable)
    }
}

async fn send_json<B: Serialize, T: DeserializeOwned>(verb: Verb, url: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = builder(verb, url)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, url, body);
        Err(ApiError::Unavailable)
    }
}

async fn send_empty(verb: Verb, url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = builder(verb, url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, url);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn builder(verb: Verb, url: &str) -> gloo_net::http::RequestBuilder {
    let builder = match verb {
        Verb::Post => gloo_net::http::Request::post(url),
        Verb::Patch => gloo_net::http::Request::patch(url),
        Verb::Delete => gloo_net::http::Request::delete(url),
    };
    builder.header("Authorization", &bearer_header())
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
