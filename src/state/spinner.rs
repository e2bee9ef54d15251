//! Full-page loading overlay state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root shows the overlay once on mount, before any data loads. Pages
//! hide it when their own data is ready.

#[cfg(test)]
#[path = "spinner_test.rs"]
mod spinner_test;

use super::store::Reducer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpinnerState {
    pub is_showing: bool,
    pub is_opaque: bool,
}

#[derive(Clone, Copy, Debug)]
pub enum SpinnerAction {
    Show { opaque: bool },
    Hide,
}

pub struct SpinnerReducer;

impl Reducer for SpinnerReducer {
    type State = SpinnerState;
    type Action = SpinnerAction;

    fn reduce(_state: &SpinnerState, action: SpinnerAction) -> SpinnerState {
        match action {
            SpinnerAction::Show { opaque } => SpinnerState { is_showing: true, is_opaque: opaque },
            SpinnerAction::Hide => SpinnerState::default(),
        }
    }
}
