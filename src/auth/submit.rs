//! One pass through an auth form submission.
//!
//! DESIGN
//! ======
//! The flow is written against `AuthView` (submit control, status element,
//! navigation) and `AuthTransport` (the POST). `dom::FormView` and
//! `net::api::GlooTransport` are the browser implementations.
//!
//! Sequence: validate, lock the submit control, post once, then either show
//! success (and follow `redirect`) or show the error and unlock the control
//! with its original label. No retry, no timeout.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use super::payload::FormPayload;
use super::status::StatusMessage;
use super::validate::check_password_confirmation;
use crate::config::FormBinding;
use crate::error::ClientError;
use crate::net::api::{AuthTransport, interpret};

/// Page elements a submission touches.
pub trait AuthView {
    fn show_status(&self, message: &StatusMessage);
    /// Current label of the submit control.
    fn submit_label(&self) -> Option<String>;
    /// Disable the control and add the loading class, or undo both.
    fn set_loading(&self, loading: bool);
    fn set_submit_label(&self, label: &str);
    fn navigate(&self, target: &str);
}

/// How a submission ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Client-side validation failed; nothing was sent.
    Rejected(ClientError),
    /// The request was sent and failed.
    Failed(ClientError),
    /// 2xx response. `redirect` is the target that was navigated to.
    Succeeded { redirect: Option<String> },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Run one submission of `binding`'s form with the given `(name, value)`
/// entries.
pub async fn submit<V, T>(
    binding: &FormBinding,
    entries: Vec<(String, String)>,
    view: &V,
    transport: &T,
) -> SubmitOutcome
where
    V: AuthView,
    T: AuthTransport,
{
    let payload = FormPayload::from_entries_with(entries, binding.topics);

    if binding.confirm_password {
        if let Err(e) = check_password_confirmation(&payload) {
            view.show_status(&StatusMessage::error(e.user_message()));
            return SubmitOutcome::Rejected(e);
        }
    }

    let label = view.submit_label();
    view.set_loading(true);

    match send(binding, &payload, transport).await {
        Ok(redirect) => {
            view.show_status(&StatusMessage::success(binding.success_text));
            if let Some(target) = &redirect {
                log::info!("{} succeeded, redirecting to {target}", binding.form_id);
                view.navigate(target);
            } else if binding.rearm_on_success {
                release(view, label.as_deref());
            }
            SubmitOutcome::Succeeded { redirect }
        }
        Err(e) => {
            if e.is_transport() {
                log::error!("{} request to {} failed: {e}", binding.form_id, binding.endpoint);
            } else {
                log::warn!("{} rejected: {e}", binding.form_id);
            }
            view.show_status(&StatusMessage::error(e.user_message()));
            release(view, label.as_deref());
            SubmitOutcome::Failed(e)
        }
    }
}

async fn send<T: AuthTransport>(
    binding: &FormBinding,
    payload: &FormPayload,
    transport: &T,
) -> Result<Option<String>, ClientError> {
    let body = payload.to_body()?;
    let raw = transport.post_json(binding.endpoint, body).await?;
    let resp = interpret(&raw)?;
    Ok(resp.redirect_target().map(str::to_owned))
}

fn release<V: AuthView>(view: &V, label: Option<&str>) {
    view.set_loading(false);
    if let Some(label) = label {
        view.set_submit_label(label);
    }
}
