//! # gdg-web
//!
//! WASM behaviors for the server-rendered auth and settings pages: the
//! login/register/preferences form handler and the light/dark theme toggle.
//!
//! The crate never renders markup. It looks up elements by id on the page it
//! is loaded into and attaches event listeners to whatever it finds.
//!
//! ARCHITECTURE
//! ============
//! Flow logic (`auth::submit`, `theme`) is written against small traits so it
//! builds and tests natively. The `hydrate` feature adds the browser
//! implementations in `dom` and `net::api` plus the wasm start function.

pub mod auth;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod net;
pub mod theme;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// WASM entry point: installs logging, then binds the theme toggle and the
/// auth forms present on the current page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    dom::install_theme_toggle(&config::ThemeConfig::default());
    dom::install_auth_forms(&config::FormBinding::defaults());
}
