//! REST client for the Vivero API.
//!
//! ERROR HANDLING
//! ==============
//! Every call is a single best-effort request: no retry, no timeout, no
//! caching. Non-2xx responses become [`ApiError`] through
//! [`parse_response`]; everything else that goes wrong is a
//! [`ClientError::Transport`] or [`ClientError::Decode`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::error::{ApiError, ClientError};
use super::transport::{ApiRequest, HttpMethod, RawResponse, Transport};
use super::types::{HealthResponse, LoginRequest, LoginResponse};
use crate::config::ClientConfig;
use crate::messages;

const HEALTH_PATH: &str = "/api/health";
const LOGIN_PATH: &str = "/api/auth/login";

/// API client bound to one base URL and transport. Cheap to clone.
pub struct ApiClient<T> {
    base_url: Arc<str>,
    transport: Arc<T>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self { base_url: Arc::clone(&self.base_url), transport: Arc::clone(&self.transport) }
    }
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self { base_url: Arc::from(config.api_base_url.as_str()), transport: Arc::new(transport) }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /api/health`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on a non-2xx status, otherwise a
    /// transport or decode error.
    pub async fn check_health(&self) -> Result<HealthResponse, ClientError> {
        let request = ApiRequest { method: HttpMethod::Get, url: self.endpoint(HEALTH_PATH), body: None };
        self.call(request).await
    }

    /// Authenticate with `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on a non-2xx status (bad credentials,
    /// disabled user, ...), otherwise a transport or decode error.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let body = serde_json::to_value(LoginRequest { username, password })
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        let request = ApiRequest { method: HttpMethod::Post, url: self.endpoint(LOGIN_PATH), body: Some(body) };
        self.call(request).await
    }

    async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ClientError> {
        let method = request.method;
        let url = request.url.clone();
        log::debug!("{method:?} {url}");

        let result = match self.transport.send(request).await {
            Ok(raw) => parse_response(raw),
            Err(e) => Err(e),
        };
        match &result {
            Err(ClientError::Api(e)) => log::warn!("{method:?} {url} -> {}: {}", e.status, e.message),
            Err(e) => log::warn!("{method:?} {url} failed: {e}"),
            Ok(_) => {}
        }
        result
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classify a raw response into a typed body or an error.
///
/// A body is JSON when the content type contains `application/json`. A
/// non-2xx status yields [`ApiError`] with the JSON `error` string when
/// present, else the status text, else a fixed fallback.
///
/// # Errors
///
/// [`ClientError::Api`] for every non-2xx status; [`ClientError::Decode`]
/// for a success body that is not JSON or has the wrong shape.
pub fn parse_response<R: DeserializeOwned>(raw: RawResponse) -> Result<R, ClientError> {
    let is_json = raw.is_json();

    if !raw.is_success() {
        // A broken JSON error body still classifies by status.
        let body = if is_json { serde_json::from_str::<serde_json::Value>(&raw.body).ok() } else { None };
        let message = body
            .as_ref()
            .and_then(|b| b.get("error"))
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
            .map_or_else(|| failure_message(&raw.status_text), str::to_owned);
        return Err(ApiError { status: raw.status, message }.into());
    }

    if !is_json {
        return Err(ClientError::Decode(format!(
            "expected JSON body, got {}",
            raw.content_type.as_deref().unwrap_or("no content type")
        )));
    }
    serde_json::from_str(&raw.body).map_err(|e| ClientError::Decode(e.to_string()))
}

fn failure_message(status_text: &str) -> String {
    if status_text.is_empty() { messages::FALLBACK_API_ERROR.to_owned() } else { status_text.to_owned() }
}
