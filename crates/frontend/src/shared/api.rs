//! Backend access: URL construction, the `X-Telegram-Init-Data` auth
//! header and the shared error type.
//!
//! Every panel goes through these helpers; failures are fire-once (no
//! retries) and 403 stays distinguishable so views can render the
//! role-restriction panel instead of an alert.

use crate::telegram;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Request failure as the panels see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Panel opened outside Telegram — no signed initData to send.
    NoInitData,
    /// HTTP 403: the caller's role does not allow the endpoint.
    Forbidden,
    /// Any other non-2xx status.
    Http(u16),
    Network(String),
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16) -> ApiError {
        match status {
            403 => ApiError::Forbidden,
            other => ApiError::Http(other),
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NoInitData => write!(f, "Telegram WebApp data not available"),
            ApiError::Forbidden => write!(f, "Access Denied: Insufficient permissions"),
            ApiError::Http(status) => write!(f, "API Error: {}", status),
            ApiError::Network(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

/// Base URL of the backend (same origin as the served panel).
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn init_data() -> Result<String, ApiError> {
    telegram::init_data().ok_or(ApiError::NoInitData)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("API error {}: {}", status, body);
        return Err(ApiError::from_status(status));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let init_data = init_data()?;
    let response = Request::get(&api_url(path))
        .header("Content-Type", "application/json")
        .header("X-Telegram-Init-Data", &init_data)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let init_data = init_data()?;
    let response = Request::post(&api_url(path))
        .header("X-Telegram-Init-Data", &init_data)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST without a body (premium/block/unblock style actions).
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let init_data = init_data()?;
    let response = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .header("X-Telegram-Init-Data", &init_data)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let init_data = init_data()?;
    let response = Request::delete(&api_url(path))
        .header("Content-Type", "application/json")
        .header("X-Telegram-Init-Data", &init_data)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_is_distinguished_from_other_statuses() {
        assert!(ApiError::from_status(403).is_forbidden());
        assert_eq!(ApiError::from_status(500), ApiError::Http(500));
        assert_eq!(ApiError::from_status(404), ApiError::Http(404));
        assert!(!ApiError::from_status(401).is_forbidden());
    }

    #[test]
    fn display_matches_alert_texts() {
        assert_eq!(
            ApiError::Forbidden.to_string(),
            "Access Denied: Insufficient permissions"
        );
        assert_eq!(ApiError::Http(500).to_string(), "API Error: 500");
        assert_eq!(
            ApiError::NoInitData.to_string(),
            "Telegram WebApp data not available"
        );
    }
}
