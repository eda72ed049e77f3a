//! Browser implementations of the theme and auth seams, plus event binding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Every element is looked up by the
//! ids in `config`; a page that lacks one simply does not get that behavior.
//! Listener closures live for the whole page and are leaked with `forget`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, FormData, HtmlButtonElement, HtmlFormElement, Storage};

use crate::auth::status::StatusMessage;
use crate::auth::submit::{AuthView, submit};
use crate::config::{FormBinding, LOADING_CLASS, MESSAGE_ID, ThemeConfig};
use crate::error::ClientError;
use crate::net::api::GlooTransport;
use crate::theme::{Theme, ThemeController, ThemeStore, ThemeSurface};

fn document() -> Result<Document, ClientError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ClientError::Dom("no document".to_owned()))
}

fn js_err(e: JsValue) -> ClientError {
    ClientError::Dom(format!("{e:?}"))
}

// =============================================================================
// THEME
// =============================================================================

/// `ThemeStore` over `window.localStorage`.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_owned()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(format!("{e:?}")))
    }
}

/// `<html>` theme attribute plus the toggle's icon element.
pub struct DocumentSurface {
    root: Element,
    icon: Option<Element>,
    attribute: &'static str,
}

impl DocumentSurface {
    /// # Errors
    ///
    /// Returns `ClientError::Dom` if the document has no root element.
    pub fn locate(document: &Document, config: &ThemeConfig) -> Result<Self, ClientError> {
        let root = document
            .document_element()
            .ok_or_else(|| ClientError::Dom("no document element".to_owned()))?;
        let icon = document.query_selector(config.icon_selector).ok().flatten();
        Ok(Self { root, icon, attribute: config.attribute })
    }
}

impl ThemeSurface for DocumentSurface {
    fn applied(&self) -> Option<String> {
        self.root.get_attribute(self.attribute)
    }

    fn apply(&self, theme: Theme) {
        if let Err(e) = self.root.set_attribute(self.attribute, theme.as_str()) {
            log::warn!("failed to set {}: {e:?}", self.attribute);
        }
    }

    fn set_icon(&self, glyph: &str) {
        if let Some(icon) = &self.icon {
            icon.set_text_content(Some(glyph));
        }
    }
}

/// Apply the stored theme and wire the toggle button, if the page has one.
pub fn install_theme_toggle(config: &ThemeConfig) {
    if let Err(e) = try_install_theme_toggle(config) {
        log::warn!("theme toggle not installed: {e}");
    }
}

fn try_install_theme_toggle(config: &ThemeConfig) -> Result<(), ClientError> {
    let document = document()?;
    let surface = DocumentSurface::locate(&document, config)?;
    let themes = Rc::new(ThemeController::new(config.clone(), LocalStorage::open(), surface));
    themes.init();

    let Some(toggle) = document.get_element_by_id(config.toggle_id) else {
        log::debug!("no #{} on this page", config.toggle_id);
        return Ok(());
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
        let theme = themes.toggle();
        log::debug!("theme toggled to {}", theme.as_str());
    }));
    toggle
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .map_err(js_err)?;
    callback.forget();
    Ok(())
}

// =============================================================================
// AUTH FORMS
// =============================================================================

/// `AuthView` over the form's first `<button>` and the page's `#message`.
pub struct FormView {
    message: Option<Element>,
    button: Option<HtmlButtonElement>,
}

impl FormView {
    pub fn locate(document: &Document, form: &HtmlFormElement) -> Self {
        let message = document.get_element_by_id(MESSAGE_ID);
        let button = form
            .query_selector("button")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        Self { message, button }
    }
}

impl AuthView for FormView {
    fn show_status(&self, message: &StatusMessage) {
        let Some(el) = &self.message else {
            log::debug!("no #{MESSAGE_ID} element for: {}", message.text);
            return;
        };
        el.set_text_content(Some(&message.text));
        el.set_class_name(&message.class_name());
    }

    fn submit_label(&self) -> Option<String> {
        self.button.as_ref().and_then(|b| b.text_content())
    }

    fn set_loading(&self, loading: bool) {
        let Some(button) = &self.button else {
            return;
        };
        button.set_disabled(loading);
        let classes = button.class_list();
        let result = if loading { classes.add_1(LOADING_CLASS) } else { classes.remove_1(LOADING_CLASS) };
        if let Err(e) = result {
            log::warn!("failed to toggle {LOADING_CLASS} class: {e:?}");
        }
    }

    fn set_submit_label(&self, label: &str) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(label));
        }
    }

    fn navigate(&self, target: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(target) {
            log::error!("navigation to {target} failed: {e:?}");
        }
    }
}

/// Every string-valued `(name, value)` entry of `form`, in document order.
/// File inputs are skipped.
///
/// # Errors
///
/// Returns `ClientError::Dom` if `FormData` cannot be built or iterated.
pub fn form_entries(form: &HtmlFormElement) -> Result<Vec<(String, String)>, ClientError> {
    let data = FormData::new_with_form(form).map_err(js_err)?;
    let iter = js_sys::try_iter(&data)
        .map_err(js_err)?
        .ok_or_else(|| ClientError::Dom("FormData is not iterable".to_owned()))?;

    let mut entries = Vec::new();
    for item in iter {
        let pair = js_sys::Array::from(&item.map_err(js_err)?);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            entries.push((name, value));
        }
    }
    Ok(entries)
}

/// Attach the submit handler to every bound form present on the page.
pub fn install_auth_forms(bindings: &[FormBinding]) {
    let document = match document() {
        Ok(d) => d,
        Err(e) => {
            log::warn!("auth forms not installed: {e}");
            return;
        }
    };
    for binding in bindings {
        match bind_form(&document, binding.clone()) {
            Ok(true) => log::debug!("bound #{} to {}", binding.form_id, binding.endpoint),
            Ok(false) => log::debug!("no #{} on this page", binding.form_id),
            Err(e) => log::warn!("#{} not bound: {e}", binding.form_id),
        }
    }
}

fn bind_form(document: &Document, binding: FormBinding) -> Result<bool, ClientError> {
    let Some(element) = document.get_element_by_id(binding.form_id) else {
        return Ok(false);
    };
    let form = element
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| ClientError::Dom(format!("#{} is not a form", binding.form_id)))?;
    let binding = Rc::new(binding);

    let target = form.clone();
    let document = document.clone();
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        let view = FormView::locate(&document, &target);
        let entries = match form_entries(&target) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("cannot read #{}: {e}", binding.form_id);
                view.show_status(&StatusMessage::error(e.user_message()));
                return;
            }
        };
        let binding = Rc::clone(&binding);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submit(&binding, entries, &view, &GlooTransport).await;
            log::debug!("#{} submission finished: success={}", binding.form_id, outcome.is_success());
        });
    }));
    form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref())
        .map_err(js_err)?;
    callback.forget();
    Ok(true)
}
