//! Session-scoped data loaders mounted once the user is authenticated.
//!
//! SYSTEM CONTEXT
//! ==============
//! Polls agents (feeding Agents and the derived ClusterOverview) and loads
//! the user list once. Renders nothing; unmounting on sign-out stops the
//! poller, discards any in-flight responses and clears the session's lists.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::cluster::ClusterReducer;
use crate::state::collections::{AgentsReducer, CollectionAction, UsersReducer};
use crate::state::store::use_action_context;
use crate::util::cluster_sync::ClusterSync;

#[component]
pub fn AppContexts() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let users = use_action_context::<UsersReducer>();
    let sync = ClusterSync::new(use_action_context::<AgentsReducer>(), use_action_context::<ClusterReducer>());

    #[cfg(feature = "hydrate")]
    {
        let poll_sync = sync.clone();
        crate::util::polling::use_polling(move || poll_sync.spawn(), Signal::stored(config.cluster_poll_delay_ms));

        let set_users = users.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users().await {
                Ok(list) => set_users.dispatch(CollectionAction::Set(list)),
                Err(e) => log::warn!("user list fetch failed: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    on_cleanup(move || {
        sync.reset();
        users.dispatch(CollectionAction::Clear);
    });
}
