//! Auth form handling for the login, registration and preferences forms.
//!
//! ARCHITECTURE
//! ============
//! `payload` and `validate` are pure transforms over submitted form entries,
//! `status` names what the page shows, and `submit` drives one submission
//! through the `AuthView`/`AuthTransport` seams.

pub mod payload;
pub mod status;
pub mod submit;
pub mod validate;
