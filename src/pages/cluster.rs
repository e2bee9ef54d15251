//! Cluster page listing agents and their slot occupancy.

#[cfg(test)]
#[path = "cluster_test.rs"]
mod cluster_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Agent;
use crate::state::auth::AuthReducer;
use crate::state::collections::AgentsReducer;
use crate::state::spinner::{SpinnerAction, SpinnerReducer};
use crate::state::store::{use_action_context, use_slice, use_state_context};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ClusterPage() -> impl IntoView {
    let auth = use_state_context::<AuthReducer>();
    let agents = use_state_context::<AgentsReducer>();
    let set_spinner = use_action_context::<SpinnerReducer>();

    install_unauth_redirect(use_slice(&auth, |s| s.clone()), use_navigate());

    let loaded = use_slice(&agents, |s| s.loaded);
    Effect::new(move || {
        if loaded.get() {
            set_spinner.dispatch(SpinnerAction::Hide);
        }
    });

    let items = use_slice(&agents, |s| s.items.clone());

    view! {
        <div class="cluster-page">
            <h1>"Agents"</h1>
            <table class="cluster-page__table">
                <thead>
                    <tr>
                        <th>"Agent"</th>
                        <th>"Pool"</th>
                        <th>"Slots in use"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|agent: &Agent| agent.id.clone()
                        children=move |agent: Agent| {
                            view! {
                                <tr>
                                    <td>{agent.id.clone()}</td>
                                    <td>{agent.resource_pool.clone()}</td>
                                    <td>{slot_usage(&agent)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

fn slot_usage(agent: &Agent) -> String {
    let enabled = agent.slots.iter().filter(|s| s.enabled).count();
    let used = agent.slots.iter().filter(|s| s.enabled && s.container.is_some()).count();
    format!("{used} / {enabled}")
}
