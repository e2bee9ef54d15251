//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome (navigation, banners, overlays)
//! while reading store slices and dispatching actions through the contexts
//! mounted by the root.

pub mod app_contexts;
pub mod nav_bar;
pub mod notification_stack;
pub mod root_layout;
pub mod side_bar;
pub mod spinner;
