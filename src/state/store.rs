//! Reducer-driven state containers shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each domain store owns its state exclusively. Consumers get a read handle
//! (`StateReader`) and a dispatch handle (`Dispatcher`); neither can replace
//! state directly. Changes flow through a pure reducer, and subscribers
//! register for a specific slice so they only hear about changes to it.
//!
//! Dispatches made while subscribers are being notified are queued and drained
//! in order once the current round finishes, so every reaction step sees a
//! settled state and no subscriber is ever re-entered.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyView;

use crate::util::compose::{Provider, Subtree};

/// Pure state transition for one store.
pub trait Reducer: 'static {
    type State: Clone + PartialEq + Send + Sync + 'static;
    type Action: Send + 'static;

    /// Compute the next state. Must not have side effects.
    fn reduce(state: &Self::State, action: Self::Action) -> Self::State;
}

type Listener<S> = Arc<Mutex<dyn FnMut(&S) + Send>>;

struct Inner<R: Reducer> {
    state: R::State,
    listeners: Vec<(u64, Listener<R::State>)>,
    next_listener_id: u64,
    pending: VecDeque<R::Action>,
    dispatching: bool,
}

/// State container for one domain.
pub struct Store<R: Reducer> {
    inner: Arc<Mutex<Inner<R>>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<R: Reducer> Default for Store<R>
where
    R::State: Default,
{
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: initial,
                listeners: Vec::new(),
                next_listener_id: 0,
                pending: VecDeque::new(),
                dispatching: false,
            })),
        }
    }

    /// Read-only handle for consumers.
    pub fn reader(&self) -> StateReader<R> {
        StateReader { store: self.clone() }
    }

    /// Dispatch-only handle for consumers.
    pub fn dispatcher(&self) -> Dispatcher<R> {
        Dispatcher { store: self.clone() }
    }

    fn snapshot(&self) -> R::State {
        lock(&self.inner).state.clone()
    }

    fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&lock(&self.inner).state)
    }

    fn dispatch(&self, action: R::Action) {
        {
            let mut inner = lock(&self.inner);
            inner.pending.push_back(action);
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }

        loop {
            let (next, listeners) = {
                let mut inner = lock(&self.inner);
                let Some(action) = inner.pending.pop_front() else {
                    inner.dispatching = false;
                    break;
                };
                let next = R::reduce(&inner.state, action);
                if next == inner.state {
                    continue;
                }
                inner.state = next.clone();
                let listeners = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect::<Vec<_>>();
                (next, listeners)
            };

            for listener in listeners {
                let mut notify = lock(&listener);
                (*notify)(&next);
            }
        }
    }

    fn subscribe<T, S, F>(&self, selector: S, mut on_change: F) -> Subscription
    where
        T: PartialEq + Send + 'static,
        S: Fn(&R::State) -> T + Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        let mut last = self.select(&selector);
        let listener: Listener<R::State> = Arc::new(Mutex::new(move |state: &R::State| {
            let current = selector(state);
            if current != last {
                on_change(&current);
                last = current;
            }
        }));

        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, listener));
            id
        };

        let weak: Weak<Mutex<Inner<R>>> = Arc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    lock(&inner).listeners.retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

/// Read accessor exposed to descendants.
pub struct StateReader<R: Reducer> {
    store: Store<R>,
}

impl<R: Reducer> Clone for StateReader<R> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone() }
    }
}

impl<R: Reducer> StateReader<R> {
    /// Clone of the full current state.
    pub fn get(&self) -> R::State {
        self.store.snapshot()
    }

    /// Project a value out of the current state without cloning all of it.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        self.store.select(selector)
    }

    /// Register for changes to the slice picked by `selector`.
    ///
    /// `on_change` receives the new slice value each time it differs from the
    /// previous one. Dropping the returned `Subscription` unregisters it.
    pub fn subscribe<T, S, F>(&self, selector: S, on_change: F) -> Subscription
    where
        T: PartialEq + Send + 'static,
        S: Fn(&R::State) -> T + Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        self.store.subscribe(selector, on_change)
    }
}

/// Dispatch accessor exposed to descendants.
pub struct Dispatcher<R: Reducer> {
    store: Store<R>,
}

impl<R: Reducer> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone() }
    }
}

impl<R: Reducer> Dispatcher<R> {
    pub fn dispatch(&self, action: R::Action) {
        self.store.dispatch(action);
    }
}

/// Live slice registration; unregisters on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

/// Expose `store` to descendants as a `StateReader` and a `Dispatcher` context.
pub fn provide_store<R: Reducer>(store: &Store<R>) {
    provide_context(store.reader());
    provide_context(store.dispatcher());
}

/// Provider Composer entry that mounts a fresh default store of type `R`.
pub fn store_provider<R: Reducer>() -> Provider<AnyView>
where
    R::State: Default,
{
    Box::new(|subtree: Subtree<AnyView>| {
        provide_store(&Store::<R>::default());
        subtree()
    })
}

/// Read accessor for store `R` from context.
pub fn use_state_context<R: Reducer>() -> StateReader<R> {
    expect_context::<StateReader<R>>()
}

/// Dispatch accessor for store `R` from context.
pub fn use_action_context<R: Reducer>() -> Dispatcher<R> {
    expect_context::<Dispatcher<R>>()
}

/// Mirror one slice of a store into a signal for rendering.
///
/// The subscription lives as long as the calling component's owner.
pub fn use_slice<R, T, S>(reader: &StateReader<R>, selector: S) -> ReadSignal<T>
where
    R: Reducer,
    T: Clone + PartialEq + Send + Sync + 'static,
    S: Fn(&R::State) -> T + Send + 'static,
{
    let signal = RwSignal::new(reader.select(&selector));
    let subscription = reader.subscribe(selector, move |value: &T| {
        let _ = signal.try_set(value.clone());
    });
    on_cleanup(move || drop(subscription));
    signal.read_only()
}
