//! Backend health status shown in the page banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Set to `Checking` at mount and moved once to `Ok` or `Error` when the
//! probe resolves. Login is only allowed while `Ok`.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::messages;
use crate::net::error::ClientError;
use crate::net::types::HealthResponse;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthStatus {
    #[default]
    Checking,
    Ok,
    Error,
}

impl HealthStatus {
    /// CSS modifier for the status banner.
    #[must_use]
    pub fn banner_class(self) -> &'static str {
        match self {
            Self::Checking => "status-checking",
            Self::Ok => "status-ok",
            Self::Error => "status-error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthState {
    pub status: HealthStatus,
    /// Empty while checking.
    pub message: String,
}

impl HealthState {
    /// Terminal state for a finished probe.
    #[must_use]
    pub fn from_probe(result: &Result<HealthResponse, ClientError>) -> Self {
        match result {
            Ok(health) if health.is_usable() => Self::resolved(HealthStatus::Ok, messages::HEALTH_OK),
            Ok(_) => Self::resolved(HealthStatus::Error, messages::HEALTH_DATABASE_DOWN),
            // Only 2xx bodies fail to decode: the API answered, just not with `ok`.
            Err(ClientError::Decode(_)) => Self::resolved(HealthStatus::Error, messages::HEALTH_DATABASE_DOWN),
            Err(err) => Self::resolved(HealthStatus::Error, err.user_message(messages::HEALTH_UNREACHABLE)),
        }
    }

    fn resolved(status: HealthStatus, message: &str) -> Self {
        Self { status, message: message.to_owned() }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == HealthStatus::Ok
    }

    /// Banner text for the current status.
    #[must_use]
    pub fn banner_text(&self) -> &str {
        match self.status {
            HealthStatus::Checking => messages::HEALTH_CHECKING,
            HealthStatus::Ok | HealthStatus::Error => &self.message,
        }
    }
}
