//! Agent polling that keeps the Agents and ClusterOverview stores in step.

#[cfg(test)]
#[path = "cluster_sync_test.rs"]
mod cluster_sync_test;

use super::request_guard::{RequestGuard, RequestTicket};
use crate::net::api::ApiError;
use crate::net::types::Agent;
use crate::state::cluster::{ClusterAction, ClusterOverview, ClusterReducer};
use crate::state::collections::{AgentsReducer, CollectionAction};
use crate::state::store::Dispatcher;

#[derive(Clone)]
pub struct ClusterSync {
    agents: Dispatcher<AgentsReducer>,
    cluster: Dispatcher<ClusterReducer>,
    guard: RequestGuard,
}

impl ClusterSync {
    pub fn new(agents: Dispatcher<AgentsReducer>, cluster: Dispatcher<ClusterReducer>) -> Self {
        Self { agents, cluster, guard: RequestGuard::default() }
    }

    pub fn begin(&self) -> RequestTicket {
        self.guard.issue()
    }

    /// Apply an agents response if it is still current. Returns whether it was applied.
    pub fn complete(&self, ticket: RequestTicket, result: Result<Vec<Agent>, ApiError>) -> bool {
        if !self.guard.is_current(ticket) {
            return false;
        }
        match result {
            Ok(agents) => {
                let overview = ClusterOverview::from_agents(&agents);
                self.agents.dispatch(CollectionAction::Set(agents));
                self.cluster.dispatch(ClusterAction::Set(overview));
                true
            }
            Err(e) => {
                log::warn!("agent fetch failed: {e}");
                false
            }
        }
    }

    pub fn cancel(&self) {
        self.guard.close();
    }

    /// Cancel, then drop the session's agent data so a later sign-in starts empty.
    pub fn reset(&self) {
        self.cancel();
        self.agents.dispatch(CollectionAction::Clear);
        self.cluster.dispatch(ClusterAction::Set(ClusterOverview::default()));
    }

    #[cfg(feature = "hydrate")]
    pub fn spawn(&self) {
        let this = self.clone();
        let ticket = this.begin();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_agents().await;
            this.complete(ticket, result);
        });
    }
}
