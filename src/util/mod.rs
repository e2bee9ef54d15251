//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and the bootstrap
//! flows (polling, info refresh, watchers) from page and component logic to
//! improve reuse and testability.

pub mod auth;
pub mod browser;
pub mod cluster_sync;
pub mod compose;
pub mod dark_mode;
pub mod favicon;
pub mod info_refresh;
pub mod polling;
pub mod request_guard;
pub mod telemetry;
pub mod version_skew;
