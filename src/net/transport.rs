//! HTTP transports behind a mockable trait.
//!
//! Browser builds (`csr`) send through `gloo-net`; native builds (`native`)
//! through `reqwest`. Both hand back a [`RawResponse`] so response
//! classification in `api` stays pure.

use async_trait::async_trait;

use super::error::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// One outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<serde_json::Value>,
}

/// Everything classification needs from a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| ct.contains("application/json"))
    }
}

/// Performs a single HTTP exchange. Enables mocking in tests.
///
/// Futures are `?Send` because browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and read the whole response body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when no response could be obtained.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError>;
}

// =============================================================================
// BROWSER
// =============================================================================

/// `fetch`-backed transport for the browser bundle.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError> {
        use gloo_net::http::Request;

        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        let resp = match &request.body {
            Some(body) => builder.json(body).map_err(|e| ClientError::Transport(e.to_string()))?.send().await,
            None => builder.send().await,
        }
        .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        let status_text = resp.status_text();
        let content_type = resp.headers().get("content-type");
        let body = resp.text().await.map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(RawResponse { status, status_text, content_type, body })
    }
}

// =============================================================================
// NATIVE
// =============================================================================

/// `reqwest`-backed transport for native builds and integration tests.
///
/// `status_text` is the canonical reason phrase for the status code, not the
/// phrase the server sent; `GlooTransport` passes the browser's `statusText`.
#[cfg(feature = "native")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

#[cfg(feature = "native")]
impl ReqwestTransport {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };
        let mut builder = self.http.request(method, &request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await.map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp.text().await.map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            content_type,
            body,
        })
    }
}
