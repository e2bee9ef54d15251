//! Theme selection for the web UI.
//!
//! DESIGN
//! ======
//! An explicit choice stored under `STORAGE_KEY` wins; otherwise the
//! operating system's `prefers-color-scheme` decides. The chosen theme is
//! exposed to CSS as `data-theme` on `<html>`. Resolution is a pure function
//! so the precedence rules are tested without a browser; only the storage
//! and DOM reads/writes are gated on `hydrate`.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "webui_theme";

/// `data-theme` value and stored token for a mode.
fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Interpret a stored token. Unknown tokens count as "no choice made".
fn parse_stored(value: &str) -> Option<bool> {
    match value.trim() {
        "dark" | "true" => Some(true),
        "light" | "false" => Some(false),
        _ => None,
    }
}

fn resolve(stored: Option<bool>, system_dark: bool) -> bool {
    stored.unwrap_or(system_dark)
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Whether the UI should start in dark mode.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let stored = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        resolve(stored.as_deref().and_then(parse_stored), system_prefers_dark())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve(None, false)
    }
}

/// Set `data-theme` on the document element.
pub fn apply(dark: bool) {
    let theme = theme_name(dark);
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = root.set_attribute("data-theme", theme);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = theme;
}

/// Flip the theme, apply it, and remember the choice. Returns the new mode.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, theme_name(next));
        }
    }
    next
}
