//! Theme initialization and toggle.
//!
//! Applies the configured theme class to the `<html>` element. A
//! `localStorage` override written by the toggle wins over the configured
//! default on later visits. Requires a browser environment.

use crate::config::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "tickets_theme";

/// Resolve the effective theme: localStorage override if present,
/// otherwise the configured default.
pub fn resolve(configured: Theme) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                    return if value == "dark" { Theme::Dark } else { Theme::Light };
                }
            }
        }
        configured
    }
    #[cfg(not(feature = "hydrate"))]
    {
        configured
    }
}

/// Swap the theme class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                let _ = class_list.remove_2(Theme::Light.as_class(), Theme::Dark.as_class());
                let _ = class_list.add_1(theme.as_class());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme and persist the new preference to localStorage.
pub fn toggle(current: Theme) -> Theme {
    let next = match current {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next == Theme::Dark { "dark" } else { "light" });
            }
        }
    }
    next
}
