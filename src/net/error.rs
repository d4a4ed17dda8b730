//! Failure taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` is the only failure whose text reaches the user verbatim.
//! Transport and decode failures carry their detail for logging; the view
//! layer replaces them with a generic message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// An HTTP-classified failure from the Vivero API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status code of the failed response.
    pub status: u16,
    /// Display message: server `error` field, status text, or a fallback.
    pub message: String,
}

/// Errors produced by [`crate::net::api::ApiClient`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text to show the user: the API message verbatim, otherwise `generic`.
    #[must_use]
    pub fn user_message<'a>(&'a self, generic: &'a str) -> &'a str {
        match self {
            Self::Api(err) => &err.message,
            Self::Transport(_) | Self::Decode(_) => generic,
        }
    }

    /// HTTP status for API failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}
