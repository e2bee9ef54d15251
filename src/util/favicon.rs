//! Busy/idle favicon indicator.
//!
//! The favicon reflects whether anything on the cluster is allocated. The
//! watcher subscribes to the busy slice of the ClusterOverview store, so the
//! icon is written once per transition rather than on every render.

#[cfg(test)]
#[path = "favicon_test.rs"]
mod favicon_test;

use crate::state::cluster::ClusterReducer;
use crate::state::store::{StateReader, Subscription};

const IDLE_ICON: &str = "/favicon.ico";
const BUSY_ICON: &str = "/favicon-busy.ico";

pub fn icon_href(busy: bool) -> &'static str {
    if busy { BUSY_ICON } else { IDLE_ICON }
}

/// Point the document's `<link rel="icon">` at the idle or busy icon.
pub fn apply(busy: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(Some(link)) = document.query_selector("link[rel~='icon']") {
            let _ = link.set_attribute("href", icon_href(busy));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = busy;
    }
}

/// Apply the current busy state, then re-apply on each busy/idle transition.
pub fn watch<F>(cluster: &StateReader<ClusterReducer>, mut set_icon: F) -> Subscription
where
    F: FnMut(bool) + Send + 'static,
{
    set_icon(cluster.select(|overview| overview.is_busy()));
    cluster.subscribe(
        |overview| overview.is_busy(),
        move |busy: &bool| {
            log::debug!("cluster {}", if *busy { "busy" } else { "idle" });
            set_icon(*busy);
        },
    )
}
