//! Networking modules for the platform REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls and maps failures into `ApiError`; `types` defines
//! the wire schema shared by stores and pages.

pub mod api;
pub mod types;
