//! Helpers for building backend URLs and reading responses

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::shared::filters::{encode_query, FilterSet};

/// Port the API server listens on, next to the console's host
pub const API_PORT: u16 = 3000;

/// Base URL of the API, e.g. `http://localhost:3000`
///
/// Empty when there is no window.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `path?query` with the active filters of `filters`
pub fn api_url_with_filters(path: &str, filters: &FilterSet) -> String {
    with_query(&api_url(path), filters)
}

pub fn with_query(url: &str, filters: &FilterSet) -> String {
    let query = encode_query(filters);
    if query.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, query)
    }
}

/// Decode a JSON body, turning non-2xx statuses into their error text
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// `detail` of an error body when present, otherwise the status line
pub async fn error_text(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<care_contracts::shared::list_response::ErrorDetail>(&body)
        .ok()
        .and_then(|e| e.detail)
        .unwrap_or_else(|| format!("HTTP {}", status))
}
