//! Networking for the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema of the `/auth/*` endpoints and `api`
//! interprets responses and (in the browser) sends the requests.

pub mod api;
pub mod types;
