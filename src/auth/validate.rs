//! Client-side checks run before anything is sent.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use super::payload::FormPayload;
use crate::error::ClientError;

pub const PASSWORD_FIELD: &str = "password";
pub const CONFIRM_PASSWORD_FIELD: &str = "confirm_password";

/// Require `password` and `confirm_password` to be identical.
///
/// A missing field reads as empty. No trimming: whitespace is significant in
/// passwords.
///
/// # Errors
///
/// Returns `ClientError::PasswordMismatch` when the values differ.
pub fn check_password_confirmation(payload: &FormPayload) -> Result<(), ClientError> {
    let password = payload.text(PASSWORD_FIELD).unwrap_or_default();
    let confirm = payload.text(CONFIRM_PASSWORD_FIELD).unwrap_or_default();
    if password == confirm {
        Ok(())
    } else {
        Err(ClientError::PasswordMismatch)
    }
}
