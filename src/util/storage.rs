//! Theme preference persistence.
//!
//! Reads/writes a single `localStorage` key scoped to the origin. An
//! absent or unreadable store yields the light default; writes are
//! best-effort.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Load the stored theme preference, defaulting to light.
#[must_use]
pub fn load_theme() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        match stored {
            Some(value) => Theme::from_stored(&value),
            None => Theme::Light,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Persist the theme preference.
pub fn store_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_attr());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Mirror the theme onto the `data-theme` attribute of the document root.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_attr());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
