//! HTTP helpers for the `/auth/*` endpoints.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Native builds: only the response interpretation, which is what the tests
//! exercise.
//!
//! ERROR HANDLING
//! ==============
//! Every request runs once. Transport failures map to
//! `ClientError::Network`, non-2xx statuses to `ClientError::Server`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, RawResponse};
use crate::error::ClientError;

/// Sends one JSON POST and hands back the raw exchange.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// # Errors
    ///
    /// Returns `ClientError::Network` when no response was received.
    async fn post_json(&self, endpoint: &str, body: String) -> Result<RawResponse, ClientError>;
}

/// Turn a completed exchange into the decoded success body or a server error.
///
/// A 2xx whose body is not JSON (typically a followed redirect landing on an
/// HTML page) is not a success: it is reported as a network failure.
///
/// # Errors
///
/// Returns `ClientError::Server` for any non-2xx status, carrying the
/// server's `message` when the body has one, and `ClientError::Network` for
/// an unreadable 2xx body.
pub fn interpret(raw: &RawResponse) -> Result<AuthResponse, ClientError> {
    if raw.is_success() {
        AuthResponse::parse(&raw.body).map_err(|e| {
            ClientError::Network(format!("unreadable {} response body: {e}", raw.status))
        })
    } else {
        let body = AuthResponse::from_body(&raw.body);
        Err(ClientError::Server { status: raw.status, message: body.message })
    }
}

/// `AuthTransport` over the browser `fetch` API.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl AuthTransport for GlooTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<RawResponse, ClientError> {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
