//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth redirect, spinner
//! readiness) and delegates rendering details to `components`.

pub mod cluster;
pub mod dashboard;
pub mod login;
pub mod not_found;
