//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `info`, `cluster`, etc.) so individual
//! components depend on small focused stores. Every domain store is a
//! `store::Store` driven by a pure reducer.

pub mod auth;
pub mod cluster;
pub mod collections;
pub mod info;
pub mod notifications;
pub mod spinner;
pub mod store;
pub mod ui;
