//! Analytics bootstrap driven by server-supplied telemetry settings.
//!
//! Runs on every Info update. When telemetry is enabled and a key is present
//! the analytics client is loaded, the session is identified by cluster id,
//! and one page view is recorded. Otherwise nothing happens. There is no
//! de-init path: once loaded, the analytics client stays active for the rest
//! of the page session even if a later update disables telemetry.
//!
//! Client-side navigation does not reload the page, so `PageTracker` records
//! an extra page view for each route change while telemetry is active.

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_test;

use crate::net::types::{PlatformInfo, TelemetryInfo};
use crate::state::info::InfoReducer;
use crate::state::store::{StateReader, Subscription};

/// Analytics SDK surface the bootstrap needs.
pub trait AnalyticsClient {
    fn load(&self, key: &str);
    fn identify(&self, user_id: &str);
    fn page(&self);
}

/// Initialize analytics for `info` if allowed. Returns whether the client was touched.
pub fn bootstrap(info: &PlatformInfo, client: &impl AnalyticsClient) -> bool {
    let Some(key) = info.telemetry.active_key() else {
        log::debug!("telemetry disabled or unkeyed; skipping analytics");
        return false;
    };
    client.load(key);
    client.identify(&info.cluster_id);
    client.page();
    log::debug!("analytics initialized for cluster {}", info.cluster_id);
    true
}

/// Run `bootstrap` after every Info update.
pub fn watch<C>(info: &StateReader<InfoReducer>, client: C) -> Subscription
where
    C: AnalyticsClient + Send + 'static,
{
    info.subscribe(
        |state| (state.revision, state.info.clone()),
        move |(_, info): &(u64, Option<PlatformInfo>)| {
            if let Some(info) = info {
                bootstrap(info, &client);
            }
        },
    )
}

/// Page views for client-side route changes.
///
/// The first path seen is the initial load, which `bootstrap` already counts.
#[derive(Clone, Debug, Default)]
pub struct PageTracker {
    last_path: Option<String>,
}

impl PageTracker {
    /// Note a visit to `path`. Returns whether a page view was sent.
    pub fn visit(&mut self, path: &str, telemetry: &TelemetryInfo, client: &impl AnalyticsClient) -> bool {
        let previous = self.last_path.replace(path.to_owned());
        let Some(previous) = previous else {
            return false;
        };
        if previous == path || telemetry.active_key().is_none() {
            return false;
        }
        client.page();
        true
    }
}

/// `window.analytics` (Segment) installed by the page's snippet.
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentAnalytics;

impl SegmentAnalytics {
    #[cfg(feature = "hydrate")]
    fn call(method: &str, args: &[wasm_bindgen::JsValue]) {
        use wasm_bindgen::{JsCast, JsValue};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(analytics) = js_sys::Reflect::get(&window, &JsValue::from_str("analytics")) else {
            return;
        };
        if analytics.is_undefined() || analytics.is_null() {
            log::warn!("analytics snippet missing; cannot call {method}");
            return;
        }
        let Ok(function) = js_sys::Reflect::get(&analytics, &JsValue::from_str(method)) else {
            return;
        };
        let Ok(function) = function.dyn_into::<js_sys::Function>() else {
            return;
        };
        let args = args.iter().collect::<js_sys::Array>();
        if let Err(e) = function.apply(&analytics, &args) {
            log::warn!("analytics.{method} failed: {e:?}");
        }
    }
}

impl AnalyticsClient for SegmentAnalytics {
    fn load(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        Self::call("load", &[wasm_bindgen::JsValue::from_str(key)]);
        #[cfg(not(feature = "hydrate"))]
        let _ = key;
    }

    fn identify(&self, user_id: &str) {
        #[cfg(feature = "hydrate")]
        Self::call("identify", &[wasm_bindgen::JsValue::from_str(user_id)]);
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    }

    fn page(&self) {
        #[cfg(feature = "hydrate")]
        Self::call("page", &[]);
    }
}
