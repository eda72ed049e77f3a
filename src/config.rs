//! Page contract and endpoint table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The markup is rendered by the backend, so every id, attribute name and
//! URL this crate depends on is collected here instead of being scattered
//! through the DOM glue.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::auth::payload::TopicsShape;
use crate::theme::Theme;

/// Id of the element that receives status messages.
pub const MESSAGE_ID: &str = "message";

/// CSS class added to the submit control while a request is in flight.
pub const LOADING_CLASS: &str = "loading";

// =============================================================================
// AUTH FORMS
// =============================================================================

/// One form the auth handler attaches to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormBinding {
    /// Element id of the `<form>`.
    pub form_id: &'static str,
    /// URL the JSON payload is posted to.
    pub endpoint: &'static str,
    /// Require `password` and `confirm_password` to match before posting.
    pub confirm_password: bool,
    /// How repeated `topics` values are encoded.
    pub topics: TopicsShape,
    /// Text shown on a 2xx response.
    pub success_text: &'static str,
    /// Re-enable the submit control after success. Only useful for forms
    /// whose success response does not navigate away.
    pub rearm_on_success: bool,
}

impl FormBinding {
    pub fn login() -> Self {
        Self {
            form_id: "login-form",
            endpoint: "/auth/login",
            confirm_password: false,
            topics: TopicsShape::Collapse,
            success_text: "Success!",
            rearm_on_success: false,
        }
    }

    pub fn register() -> Self {
        Self {
            form_id: "register-form",
            endpoint: "/auth/register",
            confirm_password: true,
            topics: TopicsShape::Collapse,
            success_text: "Success!",
            rearm_on_success: false,
        }
    }

    pub fn preferences() -> Self {
        Self {
            form_id: "preferences-form",
            endpoint: "/auth/preferences",
            confirm_password: false,
            topics: TopicsShape::List,
            success_text: "Preferences saved",
            rearm_on_success: true,
        }
    }

    /// Every form the page script knows how to handle.
    pub fn defaults() -> Vec<Self> {
        vec![Self::login(), Self::register(), Self::preferences()]
    }
}

// =============================================================================
// THEME
// =============================================================================

/// Storage key, DOM hooks and glyphs for the theme toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: &'static str,
    /// Attribute set on the document element (`<html>`).
    pub attribute: &'static str,
    pub toggle_id: &'static str,
    /// Selector for the icon element inside the toggle.
    pub icon_selector: &'static str,
    pub light_icon: &'static str,
    pub dark_icon: &'static str,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme",
            attribute: "data-theme",
            toggle_id: "theme-toggle",
            icon_selector: "#theme-toggle span",
            light_icon: "\u{1f319}",
            dark_icon: "\u{2600}\u{fe0f}",
        }
    }
}

impl ThemeConfig {
    /// Glyph shown in the toggle while `theme` is applied.
    ///
    /// The icon advertises the theme a click switches to: a moon in light
    /// mode, a sun in dark mode.
    pub fn icon_for(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light_icon,
            Theme::Dark => self.dark_icon,
        }
    }
}
