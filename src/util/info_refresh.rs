//! Platform info refresh flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Polled by the root view every 15 minutes (and once on mount). Results feed
//! the Info store, which the version-skew notifier and telemetry bootstrap
//! watch.
//!
//! ERROR HANDLING
//! ==============
//! A failed or empty fetch leaves the store untouched; the next poll retries.
//! Only the most recently issued request may write, and nothing writes after
//! teardown.

#[cfg(test)]
#[path = "info_refresh_test.rs"]
mod info_refresh_test;

use super::request_guard::{RequestGuard, RequestTicket};
use crate::net::api::ApiError;
use crate::net::types::PlatformInfo;
use crate::state::info::{InfoAction, InfoReducer};
use crate::state::store::Dispatcher;

/// What happened to one info response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// Response carried no payload.
    Empty,
    /// A newer request was issued, or the flow was torn down.
    Stale,
    Failed,
}

#[derive(Clone)]
pub struct InfoRefresh {
    info: Dispatcher<InfoReducer>,
    guard: RequestGuard,
}

impl InfoRefresh {
    pub fn new(info: Dispatcher<InfoReducer>) -> Self {
        Self { info, guard: RequestGuard::default() }
    }

    /// Record a new request; earlier in-flight requests become stale.
    pub fn begin(&self) -> RequestTicket {
        self.guard.issue()
    }

    /// Apply the response for `ticket` if it is still the latest request.
    pub fn complete(&self, ticket: RequestTicket, result: Result<Option<PlatformInfo>, ApiError>) -> RefreshOutcome {
        if !self.guard.is_current(ticket) {
            log::debug!("dropping superseded info response");
            return RefreshOutcome::Stale;
        }
        match result {
            Ok(Some(info)) => {
                self.info.dispatch(InfoAction::Set(info));
                RefreshOutcome::Applied
            }
            Ok(None) => RefreshOutcome::Empty,
            Err(e) => {
                log::warn!("info fetch failed: {e}");
                RefreshOutcome::Failed
            }
        }
    }

    /// Stop applying responses, including ones already in flight.
    pub fn cancel(&self) {
        self.guard.close();
    }

    /// Issue `GET /info` and apply the result when it lands.
    #[cfg(feature = "hydrate")]
    pub fn spawn(&self) {
        let this = self.clone();
        let ticket = this.begin();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_info().await;
            this.complete(ticket, result);
        });
    }
}
