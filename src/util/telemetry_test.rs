use std::sync::{Arc, Mutex};

use super::*;
use crate::net::types::TelemetryInfo;
use crate::state::info::InfoAction;
use crate::state::store::Store;

#[derive(Clone, Default)]
struct RecordingAnalytics {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingAnalytics {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl AnalyticsClient for RecordingAnalytics {
    fn load(&self, key: &str) {
        self.calls.lock().unwrap().push(format!("load({key})"));
    }

    fn identify(&self, user_id: &str) {
        self.calls.lock().unwrap().push(format!("identify({user_id})"));
    }

    fn page(&self) {
        self.calls.lock().unwrap().push("page()".to_owned());
    }
}

fn info(enabled: bool, key: Option<&str>) -> PlatformInfo {
    PlatformInfo {
        cluster_id: "c1".to_owned(),
        version: "1.0.0".to_owned(),
        telemetry: TelemetryInfo { enabled, segment_key: key.map(str::to_owned) },
        ..PlatformInfo::default()
    }
}

// =============================================================
// bootstrap()
// =============================================================

#[test]
fn enabled_with_key_loads_identifies_and_pages_once() {
    let client = RecordingAnalytics::default();
    assert!(bootstrap(&info(true, Some("abc")), &client));
    assert_eq!(client.calls(), vec!["load(abc)", "identify(c1)", "page()"]);
}

#[test]
fn disabled_makes_no_calls() {
    let client = RecordingAnalytics::default();
    assert!(!bootstrap(&info(false, Some("abc")), &client));
    assert!(client.calls().is_empty());
}

#[test]
fn enabled_without_key_makes_no_calls() {
    let client = RecordingAnalytics::default();
    assert!(!bootstrap(&info(true, None), &client));
    assert!(!bootstrap(&info(true, Some("")), &client));
    assert!(client.calls().is_empty());
}

// =============================================================
// watch()
// =============================================================

#[test]
fn watch_bootstraps_on_each_qualifying_update() {
    let store = Store::<InfoReducer>::default();
    let client = RecordingAnalytics::default();
    let _sub = watch(&store.reader(), client.clone());

    store.dispatcher().dispatch(InfoAction::Set(info(true, Some("abc"))));
    store.dispatcher().dispatch(InfoAction::Set(info(true, Some("abc"))));

    assert_eq!(client.calls().iter().filter(|c| c.as_str() == "page()").count(), 2);
}

#[test]
fn disabling_later_does_not_undo_initialization() {
    let store = Store::<InfoReducer>::default();
    let client = RecordingAnalytics::default();
    let _sub = watch(&store.reader(), client.clone());

    store.dispatcher().dispatch(InfoAction::Set(info(true, Some("abc"))));
    store.dispatcher().dispatch(InfoAction::Set(info(false, None)));

    assert_eq!(client.calls(), vec!["load(abc)", "identify(c1)", "page()"]);
}

// =============================================================
// PageTracker
// =============================================================

fn active() -> TelemetryInfo {
    TelemetryInfo { enabled: true, segment_key: Some("abc".to_owned()) }
}

#[test]
fn initial_route_is_not_counted_twice() {
    let client = RecordingAnalytics::default();
    let mut tracker = PageTracker::default();
    assert!(!tracker.visit("/", &active(), &client));
    assert!(client.calls().is_empty());
}

#[test]
fn route_change_records_page_view_when_active() {
    let client = RecordingAnalytics::default();
    let mut tracker = PageTracker::default();
    tracker.visit("/", &active(), &client);
    assert!(tracker.visit("/cluster", &active(), &client));
    assert!(tracker.visit("/", &active(), &client));
    assert_eq!(client.calls(), vec!["page()", "page()"]);
}

#[test]
fn same_route_is_not_recounted() {
    let client = RecordingAnalytics::default();
    let mut tracker = PageTracker::default();
    tracker.visit("/cluster", &active(), &client);
    assert!(!tracker.visit("/cluster", &active(), &client));
    assert!(client.calls().is_empty());
}

#[test]
fn route_change_is_silent_when_telemetry_inactive() {
    let client = RecordingAnalytics::default();
    let mut tracker = PageTracker::default();
    let off = TelemetryInfo { enabled: false, segment_key: Some("abc".to_owned()) };
    tracker.visit("/", &off, &client);
    assert!(!tracker.visit("/cluster", &off, &client));
    // The path still advances, so re-enabling does not replay the old change.
    assert!(!tracker.visit("/cluster", &active(), &client));
    assert!(client.calls().is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn segment_client_is_inert_outside_browser() {
    let client = SegmentAnalytics;
    client.load("abc");
    client.identify("c1");
    client.page();
}
