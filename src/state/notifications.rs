//! Keyed banner notifications.
//!
//! DESIGN
//! ======
//! Notifications are keyed. Opening one whose key is already on screen
//! replaces it in place, so a repeated advisory refreshes a single banner
//! instead of stacking duplicates. Banners without a duration stay until the
//! user dismisses them.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use super::store::Reducer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationLevel {
    #[default]
    Info,
    Warning,
    Error,
}

/// Button rendered inside a notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationButton {
    pub label: String,
    pub action: NotificationCommand,
}

/// What a notification button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationCommand {
    /// Full page reload, bypassing the HTTP cache.
    Reload,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub key: String,
    pub level: NotificationLevel,
    pub message: String,
    pub description: String,
    pub button: Option<NotificationButton>,
    /// Auto-dismiss delay; `None` keeps the banner until dismissed.
    pub duration_ms: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    pub fn get(&self, key: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.key == key)
    }
}

#[derive(Clone, Debug)]
pub enum NotificationsAction {
    Open(Notification),
    Dismiss(String),
}

pub struct NotificationsReducer;

impl Reducer for NotificationsReducer {
    type State = NotificationsState;
    type Action = NotificationsAction;

    fn reduce(state: &NotificationsState, action: NotificationsAction) -> NotificationsState {
        let mut next = state.clone();
        match action {
            NotificationsAction::Open(notification) => {
                if let Some(existing) = next.items.iter_mut().find(|n| n.key == notification.key) {
                    *existing = notification;
                } else {
                    next.items.push(notification);
                }
            }
            NotificationsAction::Dismiss(key) => next.items.retain(|n| n.key != key),
        }
        next
    }
}
