//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is recovered locally: the auth handler turns the error into
//! a status message and re-arms the form. `user_message` is the only text
//! that reaches the page; `Display` is for the console log.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Shown when the server rejects a request without a `message`.
pub const FALLBACK_SERVER_MESSAGE: &str = "An error occurred";

/// Shown for transport failures.
pub const NETWORK_MESSAGE: &str = "Network error. Please try again.";

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

#[derive(Debug, Error)]
pub enum ClientError {
    /// `password` and `confirm_password` differ. No request was made.
    #[error("password confirmation does not match")]
    PasswordMismatch,

    /// Non-2xx response.
    #[error("server rejected request with status {status}")]
    Server { status: u16, message: Option<String> },

    /// The request could not be sent or its body could not be read.
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// `localStorage` was unavailable or rejected a write.
    #[error("storage error: {0}")]
    Storage(String),

    /// A DOM lookup or call failed.
    #[error("dom error: {0}")]
    Dom(String),
}

impl ClientError {
    /// Text for the page's status element.
    pub fn user_message(&self) -> String {
        match self {
            Self::PasswordMismatch => PASSWORD_MISMATCH_MESSAGE.to_owned(),
            Self::Server { message, .. } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(FALLBACK_SERVER_MESSAGE)
                .to_owned(),
            Self::Network(_) | Self::Encode(_) | Self::Storage(_) | Self::Dom(_) => {
                NETWORK_MESSAGE.to_owned()
            }
        }
    }

    /// Transport-level failures get a console trace; the others are expected
    /// outcomes of user input.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Encode(_))
    }
}
