//! Version-skew advisory.
//!
//! SYSTEM CONTEXT
//! ==============
//! After every Info update the platform's expected UI version is compared to
//! the version this bundle was built as. On mismatch a persistent banner
//! offers a hard reload. The banner always uses the same key, so repeated
//! mismatches refresh one banner instead of stacking. Mismatch is advisory,
//! never an error.

#[cfg(test)]
#[path = "version_skew_test.rs"]
mod version_skew_test;

use crate::net::types::PlatformInfo;
use crate::state::info::InfoReducer;
use crate::state::notifications::{
    Notification, NotificationButton, NotificationCommand, NotificationLevel, NotificationsAction,
};
use crate::state::store::{Dispatcher, Reducer, StateReader, Subscription};

/// Fixed identity of the version banner.
pub const VERSION_MISMATCH_KEY: &str = "version-mismatch";

#[derive(Clone, Debug)]
pub struct VersionSkewNotifier {
    build_version: String,
}

impl VersionSkewNotifier {
    pub fn new(build_version: impl Into<String>) -> Self {
        Self { build_version: build_version.into() }
    }

    /// Banner to show for `info`, or `None` when the versions match exactly.
    pub fn check(&self, info: &PlatformInfo) -> Option<Notification> {
        if info.version == self.build_version {
            return None;
        }
        Some(Notification {
            key: VERSION_MISMATCH_KEY.to_owned(),
            level: NotificationLevel::Warning,
            message: "New WebUI Version".to_owned(),
            description: format!("WebUI version v{} is available.", info.version),
            button: Some(NotificationButton { label: "Update Now".to_owned(), action: NotificationCommand::Reload }),
            duration_ms: None,
        })
    }

    /// Open (or refresh) the banner on every Info update that reports a mismatch.
    ///
    /// Any store that accepts `NotificationsAction` can display the banner.
    pub fn watch<N>(self, info: &StateReader<InfoReducer>, notifications: Dispatcher<N>) -> Subscription
    where
        N: Reducer<Action = NotificationsAction>,
    {
        info.subscribe(
            |state| (state.revision, state.info.clone()),
            move |(_, info): &(u64, Option<PlatformInfo>)| {
                let Some(info) = info else {
                    return;
                };
                if let Some(banner) = self.check(info) {
                    log::warn!("platform expects web UI {} but running {}", info.version, self.build_version);
                    notifications.dispatch(NotificationsAction::Open(banner));
                }
            },
        )
    }
}
