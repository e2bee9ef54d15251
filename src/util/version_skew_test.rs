use std::sync::Mutex;

use super::*;
use crate::state::info::InfoAction;
use crate::state::notifications::{NotificationsReducer, NotificationsState};
use crate::state::store::{Reducer, Store};

fn info(version: &str) -> PlatformInfo {
    PlatformInfo { cluster_id: "c1".to_owned(), version: version.to_owned(), ..PlatformInfo::default() }
}

/// Counts every Open dispatched, then forwards to the real reducer.
struct CountingReducer;

static OPENS: Mutex<u32> = Mutex::new(0);

impl Reducer for CountingReducer {
    type State = NotificationsState;
    type Action = NotificationsAction;

    fn reduce(state: &NotificationsState, action: NotificationsAction) -> NotificationsState {
        if matches!(action, NotificationsAction::Open(_)) {
            *OPENS.lock().unwrap() += 1;
        }
        NotificationsReducer::reduce(state, action)
    }
}

// =============================================================
// check()
// =============================================================

#[test]
fn matching_version_produces_no_banner() {
    let notifier = VersionSkewNotifier::new("1.2.0");
    assert!(notifier.check(&info("1.2.0")).is_none());
}

#[test]
fn mismatch_produces_keyed_persistent_banner() {
    let notifier = VersionSkewNotifier::new("1.2.0");
    let banner = notifier.check(&info("1.3.0")).unwrap();
    assert_eq!(banner.key, VERSION_MISMATCH_KEY);
    assert_eq!(banner.key, "version-mismatch");
    assert_eq!(banner.duration_ms, None);
    assert_eq!(banner.description, "WebUI version v1.3.0 is available.");
    assert_eq!(banner.button.unwrap().action, NotificationCommand::Reload);
}

#[test]
fn comparison_is_exact_string_inequality() {
    let notifier = VersionSkewNotifier::new("1.2.0");
    assert!(notifier.check(&info("1.2.0 ")).is_some());
    assert!(notifier.check(&info("v1.2.0")).is_some());
}

// =============================================================
// watch()
// =============================================================

#[test]
fn watch_ignores_matching_updates() {
    let info_store = Store::<InfoReducer>::default();
    let notifications = Store::<NotificationsReducer>::default();
    let _sub = VersionSkewNotifier::new("1.2.0").watch(&info_store.reader(), notifications.dispatcher());

    info_store.dispatcher().dispatch(InfoAction::Set(info("1.2.0")));

    assert!(notifications.reader().get().items.is_empty());
}

#[test]
fn repeated_mismatch_reuses_one_banner() {
    let info_store = Store::<InfoReducer>::default();
    let notifications = Store::<NotificationsReducer>::default();
    let _sub = VersionSkewNotifier::new("1.2.0").watch(&info_store.reader(), notifications.dispatcher());

    info_store.dispatcher().dispatch(InfoAction::Set(info("1.3.0")));
    info_store.dispatcher().dispatch(InfoAction::Set(info("1.4.0")));

    let items = notifications.reader().get().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].description, "WebUI version v1.4.0 is available.");
}

#[test]
fn identical_mismatching_update_reissues_banner() {
    let info_store = Store::<InfoReducer>::default();
    let notifications = Store::<CountingReducer>::default();
    let _sub = VersionSkewNotifier::new("1.2.0").watch(&info_store.reader(), notifications.dispatcher());

    info_store.dispatcher().dispatch(InfoAction::Set(info("1.3.0")));
    info_store.dispatcher().dispatch(InfoAction::Set(info("1.3.0")));

    assert_eq!(*OPENS.lock().unwrap(), 2);
    assert_eq!(notifications.reader().get().items.len(), 1);
}

#[test]
fn dismissed_banner_returns_on_next_mismatch() {
    let info_store = Store::<InfoReducer>::default();
    let notifications = Store::<NotificationsReducer>::default();
    let _sub = VersionSkewNotifier::new("1.2.0").watch(&info_store.reader(), notifications.dispatcher());

    info_store.dispatcher().dispatch(InfoAction::Set(info("1.3.0")));
    notifications.dispatcher().dispatch(NotificationsAction::Dismiss(VERSION_MISMATCH_KEY.to_owned()));
    assert!(notifications.reader().get().items.is_empty());

    info_store.dispatcher().dispatch(InfoAction::Set(info("1.3.0")));
    assert!(notifications.reader().get().get(VERSION_MISMATCH_KEY).is_some());
}

#[test]
fn banner_never_clears_itself_when_versions_realign() {
    let info_store = Store::<InfoReducer>::default();
    let notifications = Store::<NotificationsReducer>::default();
    let _sub = VersionSkewNotifier::new("1.2.0").watch(&info_store.reader(), notifications.dispatcher());

    info_store.dispatcher().dispatch(InfoAction::Set(info("1.3.0")));
    info_store.dispatcher().dispatch(InfoAction::Set(info("1.2.0")));

    assert_eq!(notifications.reader().get().items.len(), 1);
}

