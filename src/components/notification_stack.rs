//! Bottom-right banner stack for keyed notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whatever the Notifications store holds. Keys are unique in the
//! store, so a re-issued banner replaces its predecessor on screen.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationCommand, NotificationLevel, NotificationsAction, NotificationsReducer};
use crate::state::store::{use_action_context, use_slice, use_state_context};
use crate::util::browser;

#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = use_state_context::<NotificationsReducer>();
    let items = use_slice(&notifications, |s| s.items.clone());

    view! {
        <div class="notification-stack">
            <For
                each=move || items.get()
                key=|n: &Notification| (n.key.clone(), n.description.clone())
                children=move |n: Notification| view! { <NotificationCard notification=n/> }
            />
        </div>
    }
}

#[component]
fn NotificationCard(notification: Notification) -> impl IntoView {
    let dispatch = use_action_context::<NotificationsReducer>();
    let key = notification.key.clone();
    let on_dismiss = move |_| dispatch.dispatch(NotificationsAction::Dismiss(key.clone()));

    let button = notification.button.map(|button| {
        let action = button.action;
        let on_click = move |_| match action {
            NotificationCommand::Reload => browser::reload(),
        };
        view! {
            <button class="notification__action" on:click=on_click>
                {button.label}
            </button>
        }
    });

    view! {
        <div class=level_class(notification.level) role="alert">
            <div class="notification__header">
                <span class="notification__message">{notification.message}</span>
                <button class="notification__close" on:click=on_dismiss title="Dismiss">
                    "x"
                </button>
            </div>
            <p class="notification__description">{notification.description}</p>
            {button}
        </div>
    }
}

fn level_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "notification notification--info",
        NotificationLevel::Warning => "notification notification--warning",
        NotificationLevel::Error => "notification notification--error",
    }
}
