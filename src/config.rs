//! Client configuration resolved once at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only setting is the API base URL. Browser bundles have no runtime
//! environment, so `csr` builds capture `API_BASE_URL` at compile time;
//! native builds read `.env` and the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_BASE_URL_ENV: &str = "API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute base URL without a trailing slash.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build the config from the hosting environment.
    ///
    /// Invalid or empty values fall back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let api_base_url = resolve_base_url(raw_base_url().as_deref());
        log::debug!("api base url: {api_base_url}");
        Self { api_base_url }
    }
}

#[cfg(feature = "csr")]
fn raw_base_url() -> Option<String> {
    option_env!("API_BASE_URL").map(str::to_owned)
}

#[cfg(all(feature = "native", not(feature = "csr")))]
fn raw_base_url() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var(API_BASE_URL_ENV).ok()
}

#[cfg(not(any(feature = "csr", feature = "native")))]
fn raw_base_url() -> Option<String> {
    None
}

/// Normalize a raw base URL setting.
///
/// Trims whitespace and trailing slashes. Anything that is not an absolute
/// `http`/`https` URL is replaced by the default.
#[must_use]
pub fn resolve_base_url(raw: Option<&str>) -> String {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return DEFAULT_API_BASE_URL.to_owned();
    };
    if !is_http_url(value) {
        log::warn!("{API_BASE_URL_ENV}={value:?} is not an http(s) URL; using {DEFAULT_API_BASE_URL}");
        return DEFAULT_API_BASE_URL.to_owned();
    }
    value.trim_end_matches('/').to_owned()
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.has_host())
        .unwrap_or(false)
}
