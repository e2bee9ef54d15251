//! List-shaped domain stores (agents, users, experiments, tasks).
//!
//! DESIGN
//! ======
//! These domains share one shape: a list that is replaced wholesale by
//! whichever page or poller owns the fetch. A zero-sized tag keeps each
//! domain a distinct context type even when item types coincide.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

use std::marker::PhantomData;

use super::store::Reducer;
use crate::net::types::{Agent, CommandTask, Experiment, User};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    /// True after the first `Set`.
    pub loaded: bool,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loaded: false }
    }
}

#[derive(Clone, Debug)]
pub enum CollectionAction<T> {
    Set(Vec<T>),
    Clear,
}

pub struct CollectionReducer<T, Tag>(PhantomData<fn() -> (T, Tag)>);

impl<T, Tag> Reducer for CollectionReducer<T, Tag>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    Tag: 'static,
{
    type State = CollectionState<T>;
    type Action = CollectionAction<T>;

    fn reduce(_state: &CollectionState<T>, action: CollectionAction<T>) -> CollectionState<T> {
        match action {
            CollectionAction::Set(items) => CollectionState { items, loaded: true },
            CollectionAction::Clear => CollectionState::default(),
        }
    }
}

pub enum AgentsTag {}
pub enum UsersTag {}
pub enum ExperimentsTag {}
pub enum ActiveExperimentsTag {}
pub enum CommandsTag {}
pub enum NotebooksTag {}
pub enum ShellsTag {}
pub enum TensorboardsTag {}

pub type AgentsReducer = CollectionReducer<Agent, AgentsTag>;
pub type UsersReducer = CollectionReducer<User, UsersTag>;
pub type ExperimentsReducer = CollectionReducer<Experiment, ExperimentsTag>;
pub type ActiveExperimentsReducer = CollectionReducer<Experiment, ActiveExperimentsTag>;
pub type CommandsReducer = CollectionReducer<CommandTask, CommandsTag>;
pub type NotebooksReducer = CollectionReducer<CommandTask, NotebooksTag>;
pub type ShellsReducer = CollectionReducer<CommandTask, ShellsTag>;
pub type TensorboardsReducer = CollectionReducer<CommandTask, TensorboardsTag>;
