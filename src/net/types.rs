//! Wire DTOs for the Vivero API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `GET /api/health`.
///
/// Missing, null or non-string fields read as empty, i.e. "not ok".
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub status: String,
    /// Older API builds omit this field.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub database: String,
}

impl HealthResponse {
    /// The backend is usable only when both the API and its database report `"ok"`.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.status == "ok" && self.database == "ok"
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Identity returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Role name; the API calls this field `rol`.
    #[serde(rename = "rol", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned).unwrap_or_default())
}
