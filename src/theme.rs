//! Light/dark theme initialization and toggle.
//!
//! Reads the preference from `localStorage`, applies it as the `data-theme`
//! attribute on `<html>` and keeps the toggle icon in sync. Toggle writes the
//! new value back to storage.
//!
//! DESIGN
//! ======
//! `ThemeController` only talks to `ThemeStore` and `ThemeSurface`. The
//! browser implementations live in `dom`; tests use in-memory fakes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::error::ClientError;

/// Applied UI theme. Anything other than `"dark"` reads as `Light`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored or applied value, defaulting to `Light` when absent or
    /// unrecognized.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Durable key-value storage (`localStorage` in the browser).
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns `ClientError::Storage` when the value could not be written.
    fn save(&self, key: &str, value: &str) -> Result<(), ClientError>;
}

/// The document attribute and toggle icon.
pub trait ThemeSurface {
    /// Value of the theme attribute currently on the document element.
    fn applied(&self) -> Option<String>;
    fn apply(&self, theme: Theme);
    fn set_icon(&self, glyph: &str);
}

impl<T: ThemeStore + ?Sized> ThemeStore for &T {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ClientError> {
        (**self).save(key, value)
    }
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn applied(&self) -> Option<String> {
        (**self).applied()
    }

    fn apply(&self, theme: Theme) {
        (**self).apply(theme);
    }

    fn set_icon(&self, glyph: &str) {
        (**self).set_icon(glyph);
    }
}

pub struct ThemeController<S, D> {
    config: ThemeConfig,
    store: S,
    surface: D,
}

impl<S: ThemeStore, D: ThemeSurface> ThemeController<S, D> {
    pub fn new(config: ThemeConfig, store: S, surface: D) -> Self {
        Self { config, store, surface }
    }

    /// Apply the persisted preference. Called once at page load.
    pub fn init(&self) -> Theme {
        let theme = Theme::parse(self.store.load(self.config.storage_key).as_deref());
        self.render(theme);
        log::debug!("theme initialized: {}", theme.as_str());
        theme
    }

    /// Switch to the inverse of the applied theme and persist it.
    ///
    /// A failed write is logged; the page still switches.
    pub fn toggle(&self) -> Theme {
        let next = Theme::parse(self.surface.applied().as_deref()).toggled();
        self.render(next);
        if let Err(e) = self.store.save(self.config.storage_key, next.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
        next
    }

    fn render(&self, theme: Theme) {
        self.surface.apply(theme);
        self.surface.set_icon(self.config.icon_for(theme));
    }
}
