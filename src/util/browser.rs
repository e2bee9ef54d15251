//! Browser navigation side effects.
//!
//! No-ops outside the browser so SSR and native tests stay deterministic.

/// Full page reload that bypasses the HTTP cache.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            #[allow(deprecated)]
            let _ = window.location().reload_with_forceget(true);
        }
    }
}

/// Hard navigation to `href`, dropping all in-memory state.
pub fn assign(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
