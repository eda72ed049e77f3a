use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use serde_json::{Value, json};

use super::*;
use crate::auth::status::Severity;
use crate::net::types::RawResponse;

// =============================================================
// Fakes
// =============================================================

struct FakeView {
    label: RefCell<Option<String>>,
    loading: Cell<bool>,
    status: RefCell<Option<StatusMessage>>,
    navigated: RefCell<Option<String>>,
}

impl FakeView {
    fn new() -> Self {
        Self {
            label: RefCell::new(Some("Sign In".to_owned())),
            loading: Cell::new(false),
            status: RefCell::new(None),
            navigated: RefCell::new(None),
        }
    }

    fn status(&self) -> StatusMessage {
        self.status.borrow().clone().expect("no status shown")
    }
}

impl AuthView for FakeView {
    fn show_status(&self, message: &StatusMessage) {
        *self.status.borrow_mut() = Some(message.clone());
    }

    fn submit_label(&self) -> Option<String> {
        self.label.borrow().clone()
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
        if loading {
            *self.label.borrow_mut() = Some("...".to_owned());
        }
    }

    fn set_submit_label(&self, label: &str) {
        *self.label.borrow_mut() = Some(label.to_owned());
    }

    fn navigate(&self, target: &str) {
        *self.navigated.borrow_mut() = Some(target.to_owned());
    }
}

struct FakeTransport {
    reply: Result<RawResponse, String>,
    calls: RefCell<Vec<(String, Value)>>,
}

impl FakeTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self { reply: Ok(RawResponse { status, body: body.to_owned() }), calls: RefCell::new(Vec::new()) }
    }

    fn unreachable() -> Self {
        Self { reply: Err("connection refused".to_owned()), calls: RefCell::new(Vec::new()) }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn last_body(&self) -> Value {
        self.calls.borrow().last().expect("no request sent").1.clone()
    }
}

impl AuthTransport for FakeTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<RawResponse, ClientError> {
        let parsed = serde_json::from_str(&body).expect("body is JSON");
        self.calls.borrow_mut().push((endpoint.to_owned(), parsed));
        self.reply.clone().map_err(ClientError::Network)
    }
}

fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn login_entries() -> Vec<(String, String)> {
    entries(&[("email", "ada@example.com"), ("password", "pw")])
}

// =============================================================
// Validation
// =============================================================

#[test]
fn register_mismatch_sends_nothing_and_shows_error() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(200, "{}");
    let form = entries(&[("email", "a@b.com"), ("password", "one"), ("confirm_password", "two")]);

    let outcome = block_on(submit(&FormBinding::register(), form, &view, &transport));

    assert!(matches!(outcome, SubmitOutcome::Rejected(ClientError::PasswordMismatch)));
    assert_eq!(transport.call_count(), 0);
    assert_eq!(view.status(), StatusMessage::error("Passwords do not match"));
    assert!(!view.loading.get());
    assert_eq!(view.submit_label().as_deref(), Some("Sign In"));
}

#[test]
fn login_does_not_check_confirmation() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(200, "{}");
    let form = entries(&[("password", "one"), ("confirm_password", "two")]);

    let outcome = block_on(submit(&FormBinding::login(), form, &view, &transport));

    assert!(outcome.is_success());
    assert_eq!(transport.call_count(), 1);
}

// =============================================================
// Request
// =============================================================

#[test]
fn posts_payload_to_binding_endpoint() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(200, "{}");
    let form = entries(&[
        ("name", "Ada"),
        ("email", "ada@example.com"),
        ("password", "pw"),
        ("confirm_password", "pw"),
        ("topics", "tech"),
        ("topics", "science"),
    ]);

    block_on(submit(&FormBinding::register(), form, &view, &transport));

    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/auth/register");
    assert_eq!(
        calls[0].1,
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "pw",
            "confirm_password": "pw",
            "topics": ["tech", "science"],
        })
    );
}

#[test]
fn single_topic_is_posted_as_string() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(200, "{}");
    let form = entries(&[("password", "pw"), ("confirm_password", "pw"), ("topics", "tech")]);

    block_on(submit(&FormBinding::register(), form, &view, &transport));

    assert_eq!(
        transport.last_body(),
        json!({"password": "pw", "confirm_password": "pw", "topics": "tech"})
    );
}

#[test]
fn preferences_posts_single_topic_as_list() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(200, "{}");
    let form = entries(&[("summary_length", "short"), ("topics", "tech")]);

    block_on(submit(&FormBinding::preferences(), form, &view, &transport));

    assert_eq!(transport.last_body(), json!({"summary_length": "short", "topics": ["tech"]}));
}

// =============================================================
// Success
// =============================================================

#[test]
fn success_with_redirect_navigates() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(200, r#"{"success": true, "redirect": "/dashboard"}"#);

    let outcome = block_on(submit(&FormBinding::login(), login_entries(), &view, &transport));

    assert!(matches!(outcome, SubmitOutcome::Succeeded { redirect: Some(ref r) } if r == "/dashboard"));
    assert_eq!(view.navigated.borrow().as_deref(), Some("/dashboard"));
    assert_eq!(view.status(), StatusMessage::success("Success!"));
}

#[test]
fn success_without_redirect_stays_on_page() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(200, r#"{"success": true}"#);

    let outcome = block_on(submit(&FormBinding::login(), login_entries(), &view, &transport));

    assert!(matches!(outcome, SubmitOutcome::Succeeded { redirect: None }));
    assert!(view.navigated.borrow().is_none());
    assert_eq!(view.status().severity, Severity::Success);
    // Login keeps the control locked after success.
    assert!(view.loading.get());
}

#[test]
fn preferences_success_rearms_submit_control() {
    let view = FakeView::new();
    view.set_submit_label("Save");
    let transport = FakeTransport::replying(200, r#"{"success": true}"#);
    let form = entries(&[("summary_length", "balanced")]);

    block_on(submit(&FormBinding::preferences(), form, &view, &transport));

    assert_eq!(view.status(), StatusMessage::success("Preferences saved"));
    assert!(!view.loading.get());
    assert_eq!(view.submit_label().as_deref(), Some("Save"));
}

// =============================================================
// Failure
// =============================================================

#[test]
fn server_rejection_shows_message_and_restores_control() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(401, r#"{"message": "Invalid credentials"}"#);

    let outcome = block_on(submit(&FormBinding::login(), login_entries(), &view, &transport));

    assert!(matches!(outcome, SubmitOutcome::Failed(ClientError::Server { status: 401, .. })));
    assert_eq!(view.status(), StatusMessage::error("Invalid credentials"));
    assert!(!view.loading.get());
    assert_eq!(view.submit_label().as_deref(), Some("Sign In"));
    assert!(view.navigated.borrow().is_none());
}

#[test]
fn server_rejection_without_message_uses_fallback() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(500, "Internal Server Error");

    block_on(submit(&FormBinding::login(), login_entries(), &view, &transport));

    assert_eq!(view.status(), StatusMessage::error("An error occurred"));
}

#[test]
fn failure_ignores_redirect_in_body() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(400, r#"{"message": "Email already registered", "redirect": "/x"}"#);
    let form = entries(&[("password", "pw"), ("confirm_password", "pw")]);

    block_on(submit(&FormBinding::register(), form, &view, &transport));

    assert!(view.navigated.borrow().is_none());
    assert_eq!(view.status().text, "Email already registered");
}

#[test]
fn transport_failure_shows_network_error_and_restores_control() {
    let view = FakeView::new();
    let transport = FakeTransport::unreachable();

    let outcome = block_on(submit(&FormBinding::login(), login_entries(), &view, &transport));

    assert!(matches!(outcome, SubmitOutcome::Failed(ClientError::Network(_))));
    assert_eq!(view.status(), StatusMessage::error("Network error. Please try again."));
    assert!(!view.loading.get());
    assert_eq!(view.submit_label().as_deref(), Some("Sign In"));
}

#[test]
fn success_status_with_html_body_fails_and_restores_control() {
    let view = FakeView::new();
    let transport = FakeTransport::replying(200, "<html><body>Login</body></html>");

    let outcome = block_on(submit(&FormBinding::login(), login_entries(), &view, &transport));

    assert!(matches!(outcome, SubmitOutcome::Failed(ClientError::Network(_))));
    assert_eq!(view.status(), StatusMessage::error("Network error. Please try again."));
    assert!(!view.loading.get());
    assert_eq!(view.submit_label().as_deref(), Some("Sign In"));
    assert!(view.navigated.borrow().is_none());
}
