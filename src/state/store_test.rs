use std::sync::{Arc, Mutex};

use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct Counter {
    count: i32,
    label: String,
}

enum CounterAction {
    Add(i32),
    Rename(&'static str),
}

struct CounterReducer;

impl Reducer for CounterReducer {
    type State = Counter;
    type Action = CounterAction;

    fn reduce(state: &Counter, action: CounterAction) -> Counter {
        match action {
            CounterAction::Add(n) => Counter { count: state.count + n, ..state.clone() },
            CounterAction::Rename(label) => Counter { label: label.to_owned(), ..state.clone() },
        }
    }
}

fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl FnMut(&T) + Send + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |value: &T| sink.lock().unwrap().push(value.clone()))
}

// =============================================================
// Read / dispatch
// =============================================================

#[test]
fn dispatch_applies_reducer() {
    let store = Store::<CounterReducer>::default();
    store.dispatcher().dispatch(CounterAction::Add(2));
    store.dispatcher().dispatch(CounterAction::Add(3));
    assert_eq!(store.reader().get().count, 5);
}

#[test]
fn reader_select_projects_state() {
    let store = Store::<CounterReducer>::new(Counter { count: 7, label: "x".to_owned() });
    assert_eq!(store.reader().select(|s| s.count * 2), 14);
}

#[test]
fn handles_share_one_state() {
    let store = Store::<CounterReducer>::default();
    let reader = store.reader();
    let dispatcher = store.dispatcher().clone();
    dispatcher.dispatch(CounterAction::Add(1));
    assert_eq!(reader.clone().get().count, 1);
}

// =============================================================
// Slice subscriptions
// =============================================================

#[test]
fn subscriber_hears_only_its_slice() {
    let store = Store::<CounterReducer>::default();
    let (counts, on_count) = recorder::<i32>();
    let _sub = store.reader().subscribe(|s: &Counter| s.count, on_count);

    store.dispatcher().dispatch(CounterAction::Rename("a"));
    store.dispatcher().dispatch(CounterAction::Add(4));
    store.dispatcher().dispatch(CounterAction::Rename("b"));

    assert_eq!(*counts.lock().unwrap(), vec![4]);
}

#[test]
fn unchanged_state_notifies_nobody() {
    let store = Store::<CounterReducer>::default();
    let (states, on_state) = recorder::<Counter>();
    let _sub = store.reader().subscribe(Clone::clone, on_state);

    store.dispatcher().dispatch(CounterAction::Add(0));

    assert!(states.lock().unwrap().is_empty());
}

#[test]
fn dropping_subscription_unsubscribes() {
    let store = Store::<CounterReducer>::default();
    let (counts, on_count) = recorder::<i32>();
    let sub = store.reader().subscribe(|s: &Counter| s.count, on_count);
    assert_eq!(store.listener_count(), 1);

    drop(sub);
    store.dispatcher().dispatch(CounterAction::Add(1));

    assert_eq!(store.listener_count(), 0);
    assert!(counts.lock().unwrap().is_empty());
}

#[test]
fn subscription_outliving_store_drops_cleanly() {
    let store = Store::<CounterReducer>::default();
    let sub = store.reader().subscribe(|s: &Counter| s.count, |_: &i32| {});
    drop(store);
    drop(sub);
}

// =============================================================
// Re-entrant dispatch
// =============================================================

#[test]
fn dispatch_from_subscriber_is_queued_in_order() {
    let store = Store::<CounterReducer>::default();
    let dispatcher = store.dispatcher();
    let _chain = store.reader().subscribe(
        |s: &Counter| s.count,
        move |count: &i32| {
            if *count == 1 {
                dispatcher.dispatch(CounterAction::Add(10));
            }
        },
    );
    let (counts, on_count) = recorder::<i32>();
    let _observer = store.reader().subscribe(|s: &Counter| s.count, on_count);

    store.dispatcher().dispatch(CounterAction::Add(1));

    // Observer sees the first settled value before the queued follow-up.
    assert_eq!(*counts.lock().unwrap(), vec![1, 11]);
    assert_eq!(store.reader().get().count, 11);
}
