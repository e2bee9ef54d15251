//! Platform info store.
//!
//! DESIGN
//! ======
//! Info is replaced wholesale on every successful fetch and never cleared.
//! `revision` increments on each `Set`, so an identical payload still counts
//! as a fresh update for watchers keyed on it.

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

use super::store::Reducer;
use crate::net::types::PlatformInfo;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InfoState {
    /// `None` until the first successful fetch.
    pub info: Option<PlatformInfo>,
    pub revision: u64,
}

#[derive(Clone, Debug)]
pub enum InfoAction {
    Set(PlatformInfo),
}

pub struct InfoReducer;

impl Reducer for InfoReducer {
    type State = InfoState;
    type Action = InfoAction;

    fn reduce(state: &InfoState, action: InfoAction) -> InfoState {
        match action {
            InfoAction::Set(info) => InfoState { info: Some(info), revision: state.revision + 1 },
        }
    }
}
