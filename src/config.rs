//! Build-time and runtime configuration for the web UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The build version is substituted at compile time and compared against the
//! version the platform reports, so a stale bundle can prompt for a reload.
//! Poll cadences live here so pages and tests share one source of truth.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Prefix for every REST endpoint the UI calls.
pub const API_BASE: &str = "/api/v1";

/// Version embedded at build time. `WEBUI_VERSION` wins over the crate version
/// so release pipelines can stamp the platform version they ship with.
pub const BUILD_VERSION: &str = match option_env!("WEBUI_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Platform info refresh cadence (15 minutes).
pub const INFO_POLL_DELAY_MS: u32 = 900_000;

/// Agent / cluster overview refresh cadence.
pub const CLUSTER_POLL_DELAY_MS: u32 = 10_000;

/// Application configuration provided to the component tree via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Version this bundle was built as.
    pub build_version: String,
    /// Milliseconds between platform info fetches.
    pub info_poll_delay_ms: u32,
    /// Milliseconds between agent fetches while authenticated.
    pub cluster_poll_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            build_version: BUILD_VERSION.to_owned(),
            info_poll_delay_ms: INFO_POLL_DELAY_MS,
            cluster_poll_delay_ms: CLUSTER_POLL_DELAY_MS,
        }
    }
}
