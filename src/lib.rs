//! # webui
//!
//! Leptos + WASM front-end for the cluster management platform.
//!
//! This crate contains the application bootstrap (provider composition,
//! platform info polling, version-skew and telemetry watchers), the domain
//! state stores every page reads from, REST helpers, and the root layout that
//! gates navigation chrome on authentication.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
