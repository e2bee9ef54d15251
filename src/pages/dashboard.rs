//! Dashboard: cluster utilization and platform summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. It clears the full-page spinner once
//! agent data has arrived, which is the readiness signal for the root view.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthReducer;
use crate::state::cluster::{ClusterOverview, ClusterReducer};
use crate::state::collections::AgentsReducer;
use crate::state::info::InfoReducer;
use crate::state::spinner::{SpinnerAction, SpinnerReducer};
use crate::state::store::{use_action_context, use_slice, use_state_context};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_state_context::<AuthReducer>();
    let info = use_state_context::<InfoReducer>();
    let cluster = use_state_context::<ClusterReducer>();
    let agents = use_state_context::<AgentsReducer>();
    let set_spinner = use_action_context::<SpinnerReducer>();

    install_unauth_redirect(use_slice(&auth, |s| s.clone()), use_navigate());

    let agents_loaded = use_slice(&agents, |s| s.loaded);
    Effect::new(move || {
        if agents_loaded.get() {
            set_spinner.dispatch(SpinnerAction::Hide);
        }
    });

    let overview = use_slice(&cluster, |s| *s);
    let agent_count = use_slice(&agents, |s| s.items.len());
    let version = use_slice(&info, |s| s.info.as_ref().map(|i| i.version.clone()));

    view! {
        <div class="dashboard">
            <h1 class="dashboard__title">"Cluster Overview"</h1>
            <div class="dashboard__stats">
                <div class="dashboard__stat">
                    <span class="dashboard__stat-label">"Allocation"</span>
                    <span class="dashboard__stat-value">{move || format_allocation(&overview.get())}</span>
                </div>
                <div class="dashboard__stat">
                    <span class="dashboard__stat-label">"Slots"</span>
                    <span class="dashboard__stat-value">{move || format_slots(&overview.get())}</span>
                </div>
                <div class="dashboard__stat">
                    <span class="dashboard__stat-label">"Agents"</span>
                    <span class="dashboard__stat-value">{move || agent_count.get()}</span>
                </div>
                <div class="dashboard__stat">
                    <span class="dashboard__stat-label">"Platform"</span>
                    <span class="dashboard__stat-value">{move || format_version(version.get())}</span>
                </div>
            </div>
        </div>
    }
}

fn format_allocation(overview: &ClusterOverview) -> String {
    format!("{}%", overview.allocation)
}

fn format_slots(overview: &ClusterOverview) -> String {
    format!("{} / {}", overview.allocated_slots, overview.total_slots)
}

fn format_version(version: Option<String>) -> String {
    version.map_or_else(|| "--".to_owned(), |v| format!("v{v}"))
}
