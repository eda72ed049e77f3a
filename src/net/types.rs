//! Wire DTOs for the `/auth/*` JSON endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Response body of `POST /auth/login`, `/auth/register` and
/// `/auth/preferences`. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// Informational; the HTTP status decides success.
    #[serde(default)]
    pub success: Option<bool>,
    /// Human-readable failure reason.
    #[serde(default)]
    pub message: Option<String>,
    /// Where to navigate after success.
    #[serde(default)]
    pub redirect: Option<String>,
}

impl AuthResponse {
    /// Decode a response body strictly. An empty body is an empty response.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for a body that is not a JSON object.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(body)
    }

    /// Decode a body leniently: anything unreadable becomes an empty
    /// response, so a bare error status still drives the outcome.
    pub fn from_body(body: &str) -> Self {
        Self::parse(body).unwrap_or_else(|e| {
            log::debug!("auth response body is not a JSON object: {e}");
            Self::default()
        })
    }

    /// Non-empty redirect target.
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect.as_deref().map(str::trim).filter(|r| !r.is_empty())
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
