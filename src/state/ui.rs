//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the domain stores so chrome
//! controls can evolve independently of server data. Provided as a plain
//! `RwSignal<UiState>` context.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
}
